//! Insights routes

use crate::error::ApiError;
use crate::services::InsightsService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fitplan_shared::types::ForecastResponse;

pub fn insights_routes() -> Router<AppState> {
    Router::new().route("/forecast", post(forecast))
}

/// POST /api/v1/insights/forecast - AI progress forecast from today's log
async fn forecast(State(state): State<AppState>) -> Result<Json<ForecastResponse>, ApiError> {
    Ok(Json(InsightsService::forecast(&state).await?))
}
