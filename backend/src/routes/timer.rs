//! Rest timer routes

use crate::error::ApiError;
use crate::services::RestTimerService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitplan_shared::types::{RestTimerResponse, StartRestTimerRequest};

pub fn timer_routes() -> Router<AppState> {
    Router::new().route("/rest", get(get_timer).post(start_timer).delete(cancel_timer))
}

/// GET /api/v1/timer/rest
async fn get_timer(State(state): State<AppState>) -> Json<RestTimerResponse> {
    Json(RestTimerService::current(&state).await)
}

/// POST /api/v1/timer/rest - Start or restart the countdown
async fn start_timer(
    State(state): State<AppState>,
    Json(req): Json<StartRestTimerRequest>,
) -> Result<Json<RestTimerResponse>, ApiError> {
    Ok(Json(RestTimerService::start(&state, req).await?))
}

/// DELETE /api/v1/timer/rest
async fn cancel_timer(State(state): State<AppState>) -> Json<RestTimerResponse> {
    Json(RestTimerService::cancel(&state).await)
}
