//! Integration toggle routes (flags only)

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitplan_shared::log::Integration;
use fitplan_shared::session::Action;
use fitplan_shared::types::IntegrationsResponse;
use fitplan_shared::views::integration_views;

pub fn integration_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_integrations))
        .route("/:service/toggle", post(toggle_integration))
}

/// GET /api/v1/integrations
async fn list_integrations(State(state): State<AppState>) -> Json<IntegrationsResponse> {
    let session = state.session.read().await;
    Json(IntegrationsResponse {
        integrations: integration_views(&session.integrations),
    })
}

/// POST /api/v1/integrations/:service/toggle
async fn toggle_integration(
    State(state): State<AppState>,
    Path(service): Path<String>,
) -> Result<Json<IntegrationsResponse>, ApiError> {
    let integration: Integration = service.parse().map_err(ApiError::NotFound)?;

    let mut session = state.session.write().await;
    session.apply(Action::ToggleIntegration(integration));
    Ok(Json(IntegrationsResponse {
        integrations: integration_views(&session.integrations),
    }))
}
