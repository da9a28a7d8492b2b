//! Progress forecast from the day's log

use crate::error::ApiError;
use crate::state::AppState;
use chrono::Utc;
use fitplan_shared::types::ForecastResponse;
use tracing::{instrument, warn};

/// Insights service
pub struct InsightsService;

impl InsightsService {
    /// Ask the AI for a free-text forecast based on a snapshot of today's log
    #[instrument(skip(state))]
    pub async fn forecast(state: &AppState) -> Result<ForecastResponse, ApiError> {
        let client = state.ai()?;
        let log = state.session.read().await.log.clone();

        let forecast = client.generate_progress_forecast(&log).await.map_err(|e| {
            warn!(error = %e, "Forecast generation failed");
            ApiError::from(e)
        })?;

        Ok(ForecastResponse {
            forecast,
            generated_at: Utc::now(),
        })
    }
}
