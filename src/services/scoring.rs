use chrono::Utc;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::MatchOutcome;
use crate::errors::ScoringError;
use crate::scoring::{MatchScoreReport, PlayerScore, compute_ranking_points, convert_pickle_points};

/// Runs both currencies for every participant of a completed match.
pub struct MatchScoringService {
    config: AppConfig,
}

impl MatchScoringService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn score_match(&self, outcome: &MatchOutcome) -> Result<MatchScoreReport, ScoringError> {
        outcome.validate()?;

        info!(
            "Scoring {} {} match with {} participants",
            outcome.match_type.as_str(),
            outcome.format_type.as_str(),
            outcome.participants.len()
        );

        let mut scores = Vec::with_capacity(outcome.participants.len());
        for player in &outcome.participants {
            let ranking = compute_ranking_points(outcome, player, &self.config.scoring)?;
            let is_winner = outcome.is_winner(player.id);
            let pickle = convert_pickle_points(ranking.total, is_winner, &self.config.scoring);

            info!(
                "  → {} earns {} ranking points, {} pickle points",
                player.name, ranking.total, pickle.total
            );

            scores.push(PlayerScore {
                player_id: player.id,
                player_name: player.name.clone(),
                is_winner,
                ranking,
                pickle,
            });
        }

        Ok(MatchScoreReport {
            match_type: outcome.match_type,
            format_type: outcome.format_type,
            scores,
            scored_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgeGroup, FormatType, Gender, MatchType, PlayerId, PlayerRef};

    fn player(id: PlayerId, points: u32, gender: Gender) -> PlayerRef {
        PlayerRef {
            id,
            name: format!("player-{}", id),
            current_ranking_points: points,
            age_group: AgeGroup::Open,
            gender,
        }
    }

    fn service() -> MatchScoringService {
        MatchScoringService::new(AppConfig {
            scoring: Default::default(),
        })
    }

    #[test]
    fn report_covers_every_participant() {
        let outcome = MatchOutcome {
            match_type: MatchType::Casual,
            format_type: FormatType::Singles,
            participants: vec![player(1, 1200, Gender::Male), player(2, 800, Gender::Male)],
            winner_ids: vec![1],
            recorded_at: Utc::now(),
        };

        let report = service().score_match(&outcome).unwrap();
        assert_eq!(report.scores.len(), 2);
        assert!(report.scores[0].is_winner);
        assert!(!report.scores[1].is_winner);

        // Elite casual winner: 3 ranking points, ceil(4.5) + 2 = 7 pickle points.
        assert_eq!(report.scores[0].ranking.total, 3);
        assert_eq!(report.scores[0].pickle.total, 7);
        // Loser: 1 ranking point, ceil(1.5) = 2 pickle points.
        assert_eq!(report.scores[1].ranking.total, 1);
        assert_eq!(report.scores[1].pickle.total, 2);
    }

    #[test]
    fn malformed_outcome_fails_atomically() {
        let outcome = MatchOutcome {
            match_type: MatchType::Casual,
            format_type: FormatType::Doubles,
            participants: vec![player(1, 500, Gender::Male), player(2, 500, Gender::Male)],
            winner_ids: vec![1, 2],
            recorded_at: Utc::now(),
        };

        assert!(matches!(
            service().score_match(&outcome),
            Err(ScoringError::InvalidMatchOutcome { .. })
        ));
    }
}
