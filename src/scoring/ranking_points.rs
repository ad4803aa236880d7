use log::debug;

use crate::config::settings::ScoringSettings;
use crate::domain::{MatchOutcome, PlayerRef};
use crate::errors::ScoringError;

use super::multipliers;
use super::types::{AppliedMultiplier, RankingPointsResult};

/// System B: fixed additive base points (+3 win / +1 loss), scaled by the
/// tournament, development and age multipliers and rounded half-up.
pub fn compute_ranking_points(
    outcome: &MatchOutcome,
    player: &PlayerRef,
    settings: &ScoringSettings,
) -> Result<RankingPointsResult, ScoringError> {
    outcome.validate()?;
    if outcome.participant(player.id).is_none() {
        return Err(ScoringError::invalid_outcome(format!(
            "player {} is not a participant of this match",
            player.id
        )));
    }

    let is_winner = outcome.is_winner(player.id);
    let base_points = if is_winner {
        settings.base_win_points
    } else {
        settings.base_loss_points
    };

    let applied: Vec<AppliedMultiplier> = [
        multipliers::tournament_multiplier(outcome.match_type, settings),
        multipliers::development_bonus(outcome, player, settings),
        multipliers::age_multiplier(player.age_group, settings),
    ]
    .into_iter()
    .filter(|m| m.factor > 1.0)
    .collect();

    let product: f64 = applied.iter().map(|m| m.factor).product();
    let total = round_half_up(base_points as f64 * product);
    let reason = build_reason(outcome, is_winner, base_points, &applied);

    debug!(
        "player {} earns {} ranking points ({})",
        player.id, total, reason
    );

    Ok(RankingPointsResult {
        base_points,
        multipliers: applied,
        total,
        reason,
    })
}

// Math.round semantics for the non-negative values seen here.
fn round_half_up(value: f64) -> u32 {
    value.round() as u32
}

fn build_reason(
    outcome: &MatchOutcome,
    is_winner: bool,
    base_points: u32,
    applied: &[AppliedMultiplier],
) -> String {
    let mut reason = format!(
        "{} {} {}: base {}",
        outcome.match_type.as_str(),
        outcome.format_type.as_str(),
        if is_winner { "win" } else { "loss" },
        base_points
    );
    for m in applied {
        reason.push_str(&format!(", x{} {}", m.factor, m.name));
    }
    reason
}
