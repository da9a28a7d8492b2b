//! FitPlan Shared Library
//!
//! Domain types and pure logic used by both the backend and the WASM
//! module: calorie estimation, the session reducer, plan and log models,
//! and the per-tab view-models.

pub mod dashboard;
pub mod errors;
pub mod estimation;
pub mod log;
pub mod music;
pub mod plan;
pub mod profile;
pub mod rest_timer;
pub mod session;
pub mod types;
pub mod units;
pub mod validation;
pub mod views;

// Re-export commonly used items
pub use dashboard::CalorieSummary;
pub use errors::*;
pub use estimation::*;
pub use log::{DailyLog, Integration, IntegrationState, LoggedMeal, NutritionInfo};
pub use music::{Playlist, Song};
pub use plan::{
    DailyGoals, DailyMealPlan, DailyTotals, DailyWorkout, Exercise, FitnessPlan, Macros, Meal,
    PLAN_DAYS,
};
pub use profile::{ActivityLevel, DietaryPreference, FitnessGoal, Gender, UserProfile};
pub use rest_timer::{parse_rest_seconds, RestTimer};
pub use session::{Action, PlanStatus, Session, Tab};
pub use units::*;
pub use views::Screen;
