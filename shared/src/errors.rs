//! Error types for the FitPlan domain

use thiserror::Error;

/// A rejected input, tagged with the offending field when known
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    /// Create an error for a specific field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create an error that is not tied to one field
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Errors raised while reading plan payloads
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid plan structure: {0}")]
    InvalidStructure(String),

    #[error("Plan JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}
