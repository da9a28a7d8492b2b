//! Plan generation routes

use crate::error::ApiError;
use crate::services::PlannerService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use fitplan_shared::profile::UserProfile;
use fitplan_shared::types::PlanResponse;

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/", post(generate_plan).get(get_plan).delete(clear_plan))
}

/// POST /api/v1/plan - Generate a plan
///
/// Responds once day 1 is ready (202 while days 2-7 are still generating,
/// 201 if the full week arrived at once). Poll GET /plan for progress.
async fn generate_plan(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<(StatusCode, Json<PlanResponse>), ApiError> {
    let generation = PlannerService::generate_plan(&state, profile).await?;
    let status = if generation.follow_up.is_some() {
        StatusCode::ACCEPTED
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(generation.response)))
}

/// GET /api/v1/plan - Current plan and generation status
async fn get_plan(State(state): State<AppState>) -> Json<PlanResponse> {
    Json(PlannerService::current(&state).await)
}

/// DELETE /api/v1/plan - Clear the plan to start over
async fn clear_plan(State(state): State<AppState>) -> Json<PlanResponse> {
    Json(PlannerService::clear(&state).await)
}
