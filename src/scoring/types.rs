use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FormatType, MatchType, PlayerId};

/// One applied multiplier, kept by name so every result stays auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedMultiplier {
    pub name: String,
    pub factor: f64,
}

impl AppliedMultiplier {
    pub fn new(name: &'static str, factor: f64) -> Self {
        Self {
            name: name.to_string(),
            factor,
        }
    }
}

/// Ranking-point delta for one player in one match.
///
/// All factors are >= 1.0, so `total >= base_points` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingPointsResult {
    pub base_points: u32,
    pub multipliers: Vec<AppliedMultiplier>,
    pub total: u32,
    pub reason: String,
}

/// Pickle Points earned for one match, derived from the ranking delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicklePointsResult {
    pub ranking_points_earned: u32,
    pub conversion_rate: f64,
    pub converted: u32,
    pub winner_bonus: u32,
    pub total: u32,
    pub reason: String,
}

/// Both currencies for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub player_name: String,
    pub is_winner: bool,
    pub ranking: RankingPointsResult,
    pub pickle: PicklePointsResult,
}

/// Per-participant scores for a whole match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreReport {
    pub match_type: MatchType,
    pub format_type: FormatType,
    pub scores: Vec<PlayerScore>,
    pub scored_at: DateTime<Utc>,
}
