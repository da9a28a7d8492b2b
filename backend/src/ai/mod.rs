//! Generative AI client for plans, nutrition lookups and forecasts
//!
//! [`PlanClient`] is the seam the services depend on; [`GeminiClient`] is
//! the production implementation. Every call is a single request/response
//! with no retry or streaming.

mod gemini;
mod prompts;
mod schema;
#[cfg(test)]
pub(crate) mod testing;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use fitplan_shared::log::{DailyLog, NutritionInfo};
use fitplan_shared::plan::FitnessPlan;
use fitplan_shared::profile::UserProfile;
use thiserror::Error;

/// Message shown when plan generation fails for any upstream reason
pub const PLAN_FAILURE_MESSAGE: &str =
    "Failed to generate plan. The AI model may be temporarily unavailable or the request was invalid.";

/// Errors raised by the AI client
#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI API key not configured")]
    MissingCredential,

    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("AI response contained no content")]
    EmptyResponse,
}

/// Operations backed by the generative AI service
#[async_trait]
pub trait PlanClient: Send + Sync {
    /// Generate the first day of a weekly plan
    async fn generate_initial_plan(
        &self,
        profile: &UserProfile,
        maintenance_calories: i32,
    ) -> Result<FitnessPlan, AiError>;

    /// Generate days 2 to 7, consistent with the first day
    async fn generate_remaining_plan(
        &self,
        profile: &UserProfile,
        maintenance_calories: i32,
        initial_plan: &FitnessPlan,
    ) -> Result<FitnessPlan, AiError>;

    /// Estimate calories and macros for a free-text food description
    async fn get_nutritional_info_for_food(&self, food: &str) -> Result<NutritionInfo, AiError>;

    /// Free-text forecast of progress based on the day's log
    async fn generate_progress_forecast(&self, log: &DailyLog) -> Result<String, AiError>;
}
