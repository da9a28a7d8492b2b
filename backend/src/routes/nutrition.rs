//! Nutrition lookup route

use crate::error::ApiError;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitplan_shared::types::{NutritionLookupQuery, NutritionLookupResponse};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new().route("/lookup", get(lookup_food))
}

/// GET /api/v1/nutrition/lookup?food= - AI nutrition facts for a food
///
/// The result is not logged; POST it to /log/meals to record it.
async fn lookup_food(
    State(state): State<AppState>,
    Query(query): Query<NutritionLookupQuery>,
) -> Result<Json<NutritionLookupResponse>, ApiError> {
    let meal = NutritionService::lookup(&state, &query.food).await?;
    Ok(Json(NutritionLookupResponse { meal }))
}
