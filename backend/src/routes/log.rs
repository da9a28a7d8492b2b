//! Daily log routes: meals, workouts, steps and sleep

use crate::error::ApiError;
use crate::services::{NutritionService, TrackingService};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use fitplan_shared::dashboard::CalorieSummary;
use fitplan_shared::log::LoggedMeal;
use fitplan_shared::session::Action;
use fitplan_shared::types::{LogResponse, StepsResponse, ToggleResponse, ToggleWorkoutRequest};
use fitplan_shared::validation::validate_focus;

/// Create log routes
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_log))
        .route("/meals", post(log_meal))
        .route("/workouts/toggle", post(toggle_workout))
        .route("/steps", delete(reset_steps))
        .route("/steps/tracking", post(toggle_step_tracking))
        .route("/steps/sync", post(sync_steps))
        .route("/sleep/tracking", post(toggle_sleep_tracking))
}

/// GET /api/v1/log - Today's log with the calorie summary
async fn get_log(State(state): State<AppState>) -> Json<LogResponse> {
    let session = state.session.read().await;
    Json(LogResponse {
        summary: CalorieSummary::from_log(&session.log),
        log: session.log.clone(),
    })
}

/// POST /api/v1/log/meals - Log a meal
async fn log_meal(
    State(state): State<AppState>,
    Json(meal): Json<LoggedMeal>,
) -> Result<Json<LogResponse>, ApiError> {
    Ok(Json(NutritionService::log_meal(&state, meal).await?))
}

/// POST /api/v1/log/workouts/toggle - Mark a workout done or not done
async fn toggle_workout(
    State(state): State<AppState>,
    Json(req): Json<ToggleWorkoutRequest>,
) -> Result<Json<LogResponse>, ApiError> {
    validate_focus(&req.focus)?;

    let mut session = state.session.write().await;
    session.apply(Action::ToggleWorkoutComplete(req.focus));
    Ok(Json(LogResponse {
        summary: CalorieSummary::from_log(&session.log),
        log: session.log.clone(),
    }))
}

/// POST /api/v1/log/steps/tracking - Start or stop live step tracking
async fn toggle_step_tracking(State(state): State<AppState>) -> Json<StepsResponse> {
    Json(TrackingService::toggle_step_tracking(&state).await)
}

/// POST /api/v1/log/steps/sync - Simulated device sync
async fn sync_steps(State(state): State<AppState>) -> Json<StepsResponse> {
    Json(TrackingService::sync_steps(&state).await)
}

/// DELETE /api/v1/log/steps - Reset the step counter
async fn reset_steps(State(state): State<AppState>) -> Json<StepsResponse> {
    Json(TrackingService::reset_steps(&state).await)
}

/// POST /api/v1/log/sleep/tracking - Start or stop sleep tracking
async fn toggle_sleep_tracking(State(state): State<AppState>) -> Json<ToggleResponse> {
    Json(TrackingService::toggle_sleep_tracking(&state).await)
}
