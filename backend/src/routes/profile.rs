//! Planner form profile routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitplan_shared::profile::UserProfile;
use fitplan_shared::session::Action;
use fitplan_shared::validation::validate_profile;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Current form profile
async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.session.read().await.profile.clone())
}

/// PUT /api/v1/profile - Replace the form profile
///
/// The profile is validated here so a bad edit never reaches the store.
async fn update_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, ApiError> {
    validate_profile(&profile)?;
    state.dispatch(Action::EditProfile(profile.clone())).await;
    Ok(Json(profile))
}
