use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::api::models::{MultiplierTableResponse, ScoreMatchRequest, ScoreMatchResponse};
use crate::config::settings::AppConfig;
use crate::errors::ScoringError;
use crate::services::scoring::MatchScoringService;

pub struct AppState {
    pub config: AppConfig,
}

pub async fn score_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreMatchRequest>,
) -> Response {
    let outcome = match request.into_match_outcome() {
        Ok(outcome) => outcome,
        Err(e) => return validation_error(e),
    };

    let service = MatchScoringService::new(state.config.clone());
    match service.score_match(&outcome) {
        Ok(report) => Json(ScoreMatchResponse::from(report)).into_response(),
        Err(e) => validation_error(e),
    }
}

pub async fn get_multipliers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(MultiplierTableResponse::from_settings(&state.config.scoring))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn validation_error(error: ScoringError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}
