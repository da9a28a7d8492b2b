//! Meal logging and AI nutrition lookup

use crate::error::ApiError;
use crate::state::AppState;
use fitplan_shared::dashboard::CalorieSummary;
use fitplan_shared::log::LoggedMeal;
use fitplan_shared::session::Action;
use fitplan_shared::types::LogResponse;
use fitplan_shared::validation::{validate_food_name, validate_meal};
use tracing::{info, instrument, warn};

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Look up nutrition facts for a food; nothing is logged
    #[instrument(skip(state))]
    pub async fn lookup(state: &AppState, food: &str) -> Result<LoggedMeal, ApiError> {
        validate_food_name(food)?;
        let client = state.ai()?;
        let name = food.trim();

        let info = client.get_nutritional_info_for_food(name).await.map_err(|e| {
            warn!(error = %e, "Nutrition lookup failed");
            ApiError::from(e)
        })?;

        Ok(LoggedMeal::from_nutrition(name, info))
    }

    /// Append a meal to the log
    #[instrument(skip(state, meal), fields(meal = %meal.name))]
    pub async fn log_meal(state: &AppState, mut meal: LoggedMeal) -> Result<LogResponse, ApiError> {
        meal.name = meal.name.trim().to_string();
        validate_meal(&meal)?;

        let mut session = state.session.write().await;
        session.apply(Action::LogMeal(meal));
        info!(calories = session.log.calories, "Meal logged");

        Ok(LogResponse {
            summary: CalorieSummary::from_log(&session.log),
            log: session.log.clone(),
        })
    }
}
