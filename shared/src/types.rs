//! API request and response types

use crate::dashboard::CalorieSummary;
use crate::log::{DailyLog, LoggedMeal};
use crate::plan::FitnessPlan;
use crate::rest_timer::RestTimer;
use crate::session::{PlanStatus, Tab};
use crate::views::IntegrationView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// True when the same request may succeed if repeated
    pub retryable: bool,
}

/// Select the active tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

/// Toggle completion of a planned workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleWorkoutRequest {
    pub focus: String,
}

/// Nutrition lookup query string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLookupQuery {
    pub food: String,
}

/// Start a rest countdown
///
/// `seconds` wins over `rest`; `rest` is free text such as `"60-90s"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRestTimerRequest {
    pub label: String,
    #[serde(default)]
    pub seconds: Option<u32>,
    #[serde(default)]
    pub rest: Option<String>,
}

/// Plan with its generation progress
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    pub status: PlanStatus,
    pub days_loaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<FitnessPlan>,
    pub maintenance_calories: Option<i32>,
}

/// Daily log with the derived calorie summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    pub log: DailyLog,
    pub summary: CalorieSummary,
}

/// New state of an on/off switch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub enabled: bool,
}

/// Step counter after a change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsResponse {
    pub steps: u32,
    /// Steps added by this request, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<u32>,
    pub is_tracking: bool,
    pub calories_burned: i32,
}

/// Nutrition lookup result, ready to log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLookupResponse {
    pub meal: LoggedMeal,
}

/// AI progress forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub forecast: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationsResponse {
    pub integrations: Vec<IntegrationView>,
}

/// Rest timer state; `timer` is absent when none is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestTimerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<RestTimer>,
}
