//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use crate::ai::AiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitplan_shared::errors::ValidationError;
use fitplan_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::{error, warn};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Whether repeating the same request may succeed
    pub fn retryable(&self) -> bool {
        matches!(self, ApiError::Upstream(_) | ApiError::MalformedResponse(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) | ApiError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::MissingCredential => {
                ApiError::Configuration("API key not configured.".to_string())
            }
            AiError::MalformedResponse(msg) => ApiError::MalformedResponse(msg),
            AiError::EmptyResponse => ApiError::MalformedResponse(err.to_string()),
            AiError::Http(_) | AiError::Status { .. } => ApiError::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let retryable = self.retryable();
        let (code, message, field) = match self {
            ApiError::Validation(err) => ("VALIDATION_ERROR", err.message, err.field),
            ApiError::NotFound(msg) => ("NOT_FOUND", msg, None),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg, None),
            ApiError::Configuration(msg) => {
                warn!("Configuration error: {}", msg);
                ("CONFIGURATION_ERROR", msg, None)
            }
            ApiError::Upstream(msg) => {
                warn!("Upstream error: {}", msg);
                ("UPSTREAM_ERROR", msg, None)
            }
            ApiError::MalformedResponse(msg) => {
                warn!("Malformed upstream response: {}", msg);
                ("MALFORMED_RESPONSE", msg, None)
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                ("INTERNAL_ERROR", "An internal error occurred".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                retryable,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
