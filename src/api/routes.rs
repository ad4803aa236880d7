use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{AppState, get_multipliers, health, score_match};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/matches/score", post(score_match))
        .route("/api/multipliers", get(get_multipliers))
        .route("/api/health", get(health))
        .with_state(state)
}
