use crate::config::settings::ScoringSettings;

use super::types::PicklePointsResult;

/// Converts the ranking points earned in one match into Pickle Points:
/// `ceil(earned x rate)` plus a flat winner bonus. Per-event only, no decay.
pub fn convert_pickle_points(
    ranking_points_earned: u32,
    is_winner: bool,
    settings: &ScoringSettings,
) -> PicklePointsResult {
    let rate = settings.pickle_conversion_rate;
    let converted = (ranking_points_earned as f64 * rate).ceil() as u32;
    let winner_bonus = if is_winner {
        settings.winner_pickle_bonus
    } else {
        0
    };
    let total = converted + winner_bonus;

    let reason = format!(
        "ceil({} x {}) = {}, winner bonus +{}",
        ranking_points_earned, rate, converted, winner_bonus
    );

    PicklePointsResult {
        ranking_points_earned,
        conversion_rate: rate,
        converted,
        winner_bonus,
        total,
        reason,
    }
}
