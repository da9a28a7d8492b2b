//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the session store, the AI client and background tasks.

pub mod insights;
pub mod nutrition;
pub mod planner;
pub mod scheduler;
pub mod timer;
pub mod tracking;

pub use insights::InsightsService;
pub use nutrition::NutritionService;
pub use planner::PlannerService;
pub use timer::RestTimerService;
pub use tracking::TrackingService;
