pub mod multipliers;
pub mod pickle_points;
pub mod ranking_points;
pub mod types;

pub use pickle_points::convert_pickle_points;
pub use ranking_points::compute_ranking_points;
pub use types::{
    AppliedMultiplier, MatchScoreReport, PicklePointsResult, PlayerScore, RankingPointsResult,
};
