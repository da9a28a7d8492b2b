//! Health check endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe; AI-backed routes need a credential
//! - /health/live - Liveness probe

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
        }
    }
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub ai_credential: CheckStatus,
    pub model: String,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness probe
///
/// 503 when no AI credential is configured: plan, nutrition and forecast
/// requests would all fail.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let configured = state.ai.is_some();
    let ai_credential = CheckStatus {
        status: if configured { "healthy" } else { "unhealthy" },
        message: (!configured).then_some("API key not configured"),
    };

    let mut response = HealthResponse::new(if configured { "ready" } else { "not_ready" });
    response.checks = Some(HealthChecks {
        ai_credential,
        model: state.config().ai.model.clone(),
    });

    if configured {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe; OK whenever the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}
