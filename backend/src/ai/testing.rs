//! In-process [`PlanClient`] for unit tests

use super::{AiError, PlanClient};
use async_trait::async_trait;
use fitplan_shared::log::{DailyLog, NutritionInfo};
use fitplan_shared::plan::{
    DailyMealPlan, DailyTotals, DailyWorkout, Exercise, FitnessPlan, Macros, Meal,
};
use fitplan_shared::profile::UserProfile;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Canned responses; a `None` field makes that call fail with a 503
#[derive(Default)]
pub struct StubClient {
    pub initial: Option<FitnessPlan>,
    pub remaining: Option<FitnessPlan>,
    pub nutrition: Option<NutritionInfo>,
    pub forecast: Option<String>,
    /// When set, the remaining-plan call waits for a notification
    pub remaining_gate: Option<Arc<Notify>>,
    pub calls: AtomicUsize,
}

impl StubClient {
    pub fn with_plans() -> Self {
        Self {
            initial: Some(day_one_plan()),
            remaining: Some(remaining_plan()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> AiError {
        AiError::Status {
            status: 503,
            message: "The model is overloaded".to_string(),
        }
    }
}

#[async_trait]
impl PlanClient for StubClient {
    async fn generate_initial_plan(&self, _: &UserProfile, _: i32) -> Result<FitnessPlan, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.initial.clone().ok_or_else(Self::unavailable)
    }

    async fn generate_remaining_plan(
        &self,
        _: &UserProfile,
        _: i32,
        _: &FitnessPlan,
    ) -> Result<FitnessPlan, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.remaining_gate {
            gate.notified().await;
        }
        self.remaining.clone().ok_or_else(Self::unavailable)
    }

    async fn get_nutritional_info_for_food(&self, _: &str) -> Result<NutritionInfo, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.nutrition.ok_or_else(Self::unavailable)
    }

    async fn generate_progress_forecast(&self, _: &DailyLog) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.forecast.clone().ok_or_else(Self::unavailable)
    }
}

fn day(day: &str, focus: &str, calories: &str, protein: &str) -> (DailyWorkout, DailyMealPlan) {
    let workout = DailyWorkout {
        day: day.to_string(),
        focus: focus.to_string(),
        exercises: vec![Exercise {
            name: "Squat".to_string(),
            sets: "3".to_string(),
            reps: "8-10".to_string(),
            rest: "90s".to_string(),
            tips: "Drive through your heels.".to_string(),
        }],
    };
    let meals = DailyMealPlan {
        day: day.to_string(),
        meals: vec![Meal {
            name: "Lunch".to_string(),
            description: "Chicken, rice and greens".to_string(),
            calories: "650".to_string(),
            macros: Macros {
                protein: "45g".to_string(),
                carbs: "70g".to_string(),
                fat: "15g".to_string(),
            },
        }],
        daily_totals: DailyTotals {
            calories: calories.to_string(),
            protein: protein.to_string(),
            carbs: "250g".to_string(),
            fat: "80g".to_string(),
        },
    };
    (workout, meals)
}

fn plan_of(days: Vec<(DailyWorkout, DailyMealPlan)>) -> FitnessPlan {
    let (workout_plan, meal_plan) = days.into_iter().unzip();
    FitnessPlan {
        workout_plan,
        meal_plan,
    }
}

pub fn day_one_plan() -> FitnessPlan {
    plan_of(vec![day("Monday", "Upper Body Strength", "2,400 kcal", "150g")])
}

pub fn remaining_plan() -> FitnessPlan {
    plan_of(
        [
            ("Tuesday", "Cardio"),
            ("Wednesday", "Lower Body Strength"),
            ("Thursday", "Yoga"),
            ("Friday", "HIIT"),
            ("Saturday", "Full Body"),
            ("Sunday", "Rest"),
        ]
        .into_iter()
        .map(|(d, focus)| day(d, focus, "2400", "150g"))
        .collect(),
    )
}
