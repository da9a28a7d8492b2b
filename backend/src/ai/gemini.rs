//! Google Gemini implementation of [`PlanClient`]
//!
//! Calls `models/{model}:generateContent` with the credential in the
//! `x-goog-api-key` header. Structured calls set `responseMimeType` to JSON
//! and pass a response schema; the text of the first part of the first
//! candidate is the payload.

use super::{prompts, schema, AiError, PlanClient};
use crate::config::AiConfig;
use async_trait::async_trait;
use fitplan_shared::log::{DailyLog, NutritionInfo};
use fitplan_shared::plan::FitnessPlan;
use fitplan_shared::profile::UserProfile;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, instrument};

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

pub struct GeminiClient {
    api_key: SecretString,
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    /// Build a client from configuration
    ///
    /// Fails with [`AiError::MissingCredential`] before any request is made
    /// if no API key is configured.
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let api_key = match &config.api_key {
            Some(key) if config.has_api_key() => key.clone(),
            _ => return Err(AiError::MissingCredential),
        };
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            api_key,
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(&self, prompt: String, response_schema: Option<Value>) -> GeminiRequest {
        let response_mime_type = response_schema
            .as_ref()
            .map(|_| "application/json".to_string());
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                temperature: Some(self.temperature),
                response_mime_type,
                response_schema,
            },
        }
    }

    /// Send one generateContent request and return the response text
    async fn generate(
        &self,
        prompt: String,
        response_schema: Option<Value>,
    ) -> Result<String, AiError> {
        let request = self.build_request(prompt, response_schema);

        debug!(model = %self.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(self.build_url())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            AiError::MalformedResponse(format!("Failed to parse Gemini response: {e}"))
        })?;

        if let Some(error) = gemini_response.error {
            return Err(AiError::Status {
                status: status.as_u16(),
                message: error.message,
            });
        }

        Self::extract_text(gemini_response)
    }

    /// Text of the first part of the first candidate
    fn extract_text(response: GeminiResponse) -> Result<String, AiError> {
        let text = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(AiError::EmptyResponse)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    fn map_api_error(status: u16, response_text: &str) -> AiError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);
        AiError::Status { status, message }
    }

    fn parse_plan(text: &str) -> Result<FitnessPlan, AiError> {
        FitnessPlan::from_json(text).map_err(|e| AiError::MalformedResponse(e.to_string()))
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl PlanClient for GeminiClient {
    #[instrument(skip(self, profile), fields(model = %self.model))]
    async fn generate_initial_plan(
        &self,
        profile: &UserProfile,
        maintenance_calories: i32,
    ) -> Result<FitnessPlan, AiError> {
        let prompt = prompts::initial_plan(profile, maintenance_calories);
        let text = self.generate(prompt, Some(schema::plan_schema())).await?;
        Self::parse_plan(&text)
    }

    #[instrument(skip(self, profile, initial_plan), fields(model = %self.model))]
    async fn generate_remaining_plan(
        &self,
        profile: &UserProfile,
        maintenance_calories: i32,
        initial_plan: &FitnessPlan,
    ) -> Result<FitnessPlan, AiError> {
        let prompt = prompts::remaining_plan(profile, maintenance_calories, initial_plan);
        let text = self.generate(prompt, Some(schema::plan_schema())).await?;
        Self::parse_plan(&text)
    }

    #[instrument(skip(self), fields(model = %self.model))]
    async fn get_nutritional_info_for_food(&self, food: &str) -> Result<NutritionInfo, AiError> {
        let text = self
            .generate(prompts::nutrition(food), Some(schema::nutrition_schema()))
            .await?;
        let info: NutritionInfo = serde_json::from_str(&text)
            .map_err(|e| AiError::MalformedResponse(format!("Invalid nutrition payload: {e}")))?;

        let values = [info.calories, info.protein, info.carbs, info.fat];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AiError::MalformedResponse(
                "Nutrition values must be non-negative numbers".to_string(),
            ));
        }
        Ok(info)
    }

    #[instrument(skip(self, log), fields(model = %self.model))]
    async fn generate_progress_forecast(&self, log: &DailyLog) -> Result<String, AiError> {
        self.generate(prompts::progress_forecast(log), None).await
    }
}
