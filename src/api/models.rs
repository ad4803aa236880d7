use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::ScoringSettings;
use crate::domain::{AgeGroup, FormatType, Gender, MatchOutcome, MatchType, PlayerId, PlayerRef};
use crate::errors::ScoringError;
use crate::scoring::{MatchScoreReport, PicklePointsResult, RankingPointsResult};

// --- Request Structures ---

/// JSON mirror of a match outcome as the frontend posts it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMatchRequest {
    pub match_type: MatchType,
    pub format_type: FormatType,
    pub participants: Vec<PlayerPayload>,
    pub winner_ids: Vec<PlayerId>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Demographics are optional on the wire; the multiplier lookup needs them,
/// so conversion to a `PlayerRef` fails fast when they are missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    pub id: PlayerId,
    #[serde(default)]
    pub name: Option<String>,
    pub current_ranking_points: u32,
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl PlayerPayload {
    pub fn into_player_ref(self) -> Result<PlayerRef, ScoringError> {
        let gender = self.gender.ok_or_else(|| {
            ScoringError::invalid_player(format!("player {} is missing gender", self.id))
        })?;
        let age_group = self.age_group.ok_or_else(|| {
            ScoringError::invalid_player(format!("player {} is missing age group", self.id))
        })?;

        Ok(PlayerRef {
            id: self.id,
            name: self.name.unwrap_or_else(|| format!("player-{}", self.id)),
            current_ranking_points: self.current_ranking_points,
            age_group,
            gender,
        })
    }
}

impl ScoreMatchRequest {
    pub fn into_match_outcome(self) -> Result<MatchOutcome, ScoringError> {
        let participants = self
            .participants
            .into_iter()
            .map(PlayerPayload::into_player_ref)
            .collect::<Result<Vec<_>, _>>()?;

        let outcome = MatchOutcome {
            match_type: self.match_type,
            format_type: self.format_type,
            participants,
            winner_ids: self.winner_ids,
            recorded_at: self.recorded_at.unwrap_or_else(Utc::now),
        };
        outcome.validate()?;
        Ok(outcome)
    }
}

// --- Response Structures ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMatchResponse {
    pub match_type: MatchType,
    pub format_type: FormatType,
    pub scores: Vec<PlayerScoreItem>,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreItem {
    pub player_id: PlayerId,
    pub player_name: String,
    pub is_winner: bool,
    pub ranking_points: RankingPointsResult,
    pub pickle_points: PicklePointsResult,
}

impl From<MatchScoreReport> for ScoreMatchResponse {
    fn from(report: MatchScoreReport) -> Self {
        Self {
            match_type: report.match_type,
            format_type: report.format_type,
            scores: report
                .scores
                .into_iter()
                .map(|score| PlayerScoreItem {
                    player_id: score.player_id,
                    player_name: score.player_name,
                    is_winner: score.is_winner,
                    ranking_points: score.ranking,
                    pickle_points: score.pickle,
                })
                .collect(),
            scored_at: report.scored_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeMultiplierItem {
    pub bracket: String,
    pub factor: f64,
}

/// The active constant tables, for display surfaces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierTableResponse {
    pub base_win_points: u32,
    pub base_loss_points: u32,
    pub tournament_multiplier: f64,
    pub elite_threshold: u32,
    pub female_development_bonus: f64,
    pub mixed_team_development_bonus: f64,
    pub age_multipliers: Vec<AgeMultiplierItem>,
    pub pickle_conversion_rate: f64,
    pub winner_pickle_bonus: u32,
}

impl MultiplierTableResponse {
    pub fn from_settings(settings: &ScoringSettings) -> Self {
        Self {
            base_win_points: settings.base_win_points,
            base_loss_points: settings.base_loss_points,
            tournament_multiplier: settings.tournament_multiplier,
            elite_threshold: settings.elite_threshold,
            female_development_bonus: settings.female_development_bonus,
            mixed_team_development_bonus: settings.mixed_team_development_bonus,
            age_multipliers: settings
                .age_multipliers
                .as_table()
                .into_iter()
                .map(|(bracket, factor)| AgeMultiplierItem {
                    bracket: bracket.to_string(),
                    factor,
                })
                .collect(),
            pickle_conversion_rate: settings.pickle_conversion_rate,
            winner_pickle_bonus: settings.winner_pickle_bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> ScoreMatchRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn full_request_converts_to_outcome() {
        let request = payload(
            r#"{
                "matchType": "tournament",
                "formatType": "singles",
                "participants": [
                    {"id": 1, "name": "Ana", "currentRankingPoints": 900,
                     "ageGroup": "open", "gender": "female"},
                    {"id": 2, "name": "Bo", "currentRankingPoints": 1200,
                     "ageGroup": "35+", "gender": "male"}
                ],
                "winnerIds": [1]
            }"#,
        );

        let outcome = request.into_match_outcome().unwrap();
        assert_eq!(outcome.match_type, MatchType::Tournament);
        assert_eq!(outcome.participants[1].age_group, AgeGroup::ThirtyFivePlus);
        assert!(outcome.is_winner(1));
    }

    #[test]
    fn missing_gender_is_an_invalid_player_reference() {
        let request = payload(
            r#"{
                "matchType": "casual",
                "formatType": "singles",
                "participants": [
                    {"id": 1, "currentRankingPoints": 900, "ageGroup": "open"},
                    {"id": 2, "currentRankingPoints": 1200,
                     "ageGroup": "open", "gender": "male"}
                ],
                "winnerIds": [1]
            }"#,
        );

        assert!(matches!(
            request.into_match_outcome(),
            Err(ScoringError::InvalidPlayerReference { .. })
        ));
    }

    #[test]
    fn missing_age_group_is_an_invalid_player_reference() {
        let request = payload(
            r#"{
                "matchType": "casual",
                "formatType": "singles",
                "participants": [
                    {"id": 1, "currentRankingPoints": 900, "gender": "female"},
                    {"id": 2, "currentRankingPoints": 1200,
                     "ageGroup": "open", "gender": "male"}
                ],
                "winnerIds": [1]
            }"#,
        );

        assert!(matches!(
            request.into_match_outcome(),
            Err(ScoringError::InvalidPlayerReference { .. })
        ));
    }

    #[test]
    fn unknown_enum_values_fail_at_deserialization() {
        let result: Result<ScoreMatchRequest, _> = serde_json::from_str(
            r#"{
                "matchType": "exhibition",
                "formatType": "singles",
                "participants": [],
                "winnerIds": []
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn multiplier_table_mirrors_settings() {
        let table = MultiplierTableResponse::from_settings(&ScoringSettings::default());
        assert_eq!(table.age_multipliers.len(), 5);
        assert_eq!(table.age_multipliers[0].bracket, "open");
        assert_eq!(table.pickle_conversion_rate, 1.5);
    }
}
