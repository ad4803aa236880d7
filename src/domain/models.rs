use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

pub type PlayerId = i64;

/// Casual ladder play or sanctioned tournament play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Casual,
    Tournament,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Casual => "casual",
            MatchType::Tournament => "tournament",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Singles,
    Doubles,
}

impl FormatType {
    pub fn participant_count(&self) -> usize {
        match self {
            FormatType::Singles => 2,
            FormatType::Doubles => 4,
        }
    }

    /// Size of the winning side.
    pub fn winner_count(&self) -> usize {
        match self {
            FormatType::Singles => 1,
            FormatType::Doubles => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Singles => "singles",
            FormatType::Doubles => "doubles",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Age bracket used for the age multiplier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "35+")]
    ThirtyFivePlus,
    #[serde(rename = "50+")]
    FiftyPlus,
    #[serde(rename = "60+")]
    SixtyPlus,
    #[serde(rename = "70+")]
    SeventyPlus,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Open => "open",
            AgeGroup::ThirtyFivePlus => "35+",
            AgeGroup::FiftyPlus => "50+",
            AgeGroup::SixtyPlus => "60+",
            AgeGroup::SeventyPlus => "70+",
        }
    }
}

/// Read-only snapshot of a player at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
    pub current_ranking_points: u32,
    pub age_group: AgeGroup,
    pub gender: Gender,
}

impl PlayerRef {
    /// Development bonuses stop applying at the elite threshold;
    /// a player sitting exactly on it counts as elite.
    pub fn is_elite(&self, elite_threshold: u32) -> bool {
        self.current_ranking_points >= elite_threshold
    }
}

/// A completed match, validated once and never mutated afterwards.
///
/// `winner_ids` holds the whole winning side (1 id for singles, 2 for
/// doubles), so team composition is derivable: the losing team is the
/// complement of `winner_ids` among the participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub match_type: MatchType,
    pub format_type: FormatType,
    pub participants: Vec<PlayerRef>,
    pub winner_ids: Vec<PlayerId>,
    pub recorded_at: DateTime<Utc>,
}

impl MatchOutcome {
    pub fn validate(&self) -> Result<(), ScoringError> {
        let expected = self.format_type.participant_count();
        if self.participants.len() != expected {
            return Err(ScoringError::invalid_outcome(format!(
                "{} requires {} participants, got {}",
                self.format_type.as_str(),
                expected,
                self.participants.len()
            )));
        }

        let mut ids: Vec<PlayerId> = self.participants.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.participants.len() {
            return Err(ScoringError::invalid_outcome(
                "duplicate participant ids".to_string(),
            ));
        }

        let expected_winners = self.format_type.winner_count();
        if self.winner_ids.len() != expected_winners {
            return Err(ScoringError::invalid_outcome(format!(
                "{} requires {} winner id(s), got {}",
                self.format_type.as_str(),
                expected_winners,
                self.winner_ids.len()
            )));
        }

        let mut winners = self.winner_ids.clone();
        winners.sort_unstable();
        winners.dedup();
        if winners.len() != self.winner_ids.len() {
            return Err(ScoringError::invalid_outcome(
                "duplicate winner ids".to_string(),
            ));
        }

        for winner_id in &self.winner_ids {
            if self.participant(*winner_id).is_none() {
                return Err(ScoringError::invalid_outcome(format!(
                    "winner {} is not among the participants",
                    winner_id
                )));
            }
        }

        Ok(())
    }

    pub fn participant(&self, id: PlayerId) -> Option<&PlayerRef> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn is_winner(&self, id: PlayerId) -> bool {
        self.winner_ids.contains(&id)
    }

    /// All players on the same side as `id`, including the player itself.
    pub fn team_of(&self, id: PlayerId) -> Vec<&PlayerRef> {
        let winning_side = self.is_winner(id);
        self.participants
            .iter()
            .filter(|p| self.is_winner(p.id) == winning_side)
            .collect()
    }
}
