//! Weekly workout and meal plan returned by the AI planner
//!
//! Field names follow the JSON response schema the planner is asked to
//! honour, so these types deserialize the model output directly.

use crate::errors::PlanError;
use crate::units::parse_quantity;
use serde::{Deserialize, Serialize};

/// Number of days in a complete plan
pub const PLAN_DAYS: usize = 7;

/// One exercise within a workout day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    /// e.g. "3-4"
    pub sets: String,
    /// e.g. "8-12"
    pub reps: String,
    /// e.g. "60s"
    pub rest: String,
    pub tips: String,
}

/// A single day of the workout schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWorkout {
    pub day: String,
    /// Main muscle group or activity, e.g. "Upper Body Strength"
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

/// Macronutrients of a meal, as strings from the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub description: String,
    pub calories: String,
    pub macros: Macros,
}

/// Calorie and macro totals for a day of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMealPlan {
    pub day: String,
    pub meals: Vec<Meal>,
    pub daily_totals: DailyTotals,
}

/// Workout and meal schedule, day 1 first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub workout_plan: Vec<DailyWorkout>,
    pub meal_plan: Vec<DailyMealPlan>,
}

/// Daily intake goals derived from the first planned day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyGoals {
    pub calories: i32,
    pub protein: i32,
}

impl FitnessPlan {
    /// Parse a planner response, rejecting plans without workouts or meals
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let plan: FitnessPlan = serde_json::from_str(json.trim())?;
        plan.ensure_not_empty()?;
        Ok(plan)
    }

    /// Check that both halves of the plan carry at least one day
    pub fn ensure_not_empty(&self) -> Result<(), PlanError> {
        if self.workout_plan.is_empty() {
            return Err(PlanError::InvalidStructure("workoutPlan is empty".to_string()));
        }
        if self.meal_plan.is_empty() {
            return Err(PlanError::InvalidStructure("mealPlan is empty".to_string()));
        }
        Ok(())
    }

    /// Number of days covered by both workouts and meals
    pub fn days(&self) -> usize {
        self.workout_plan.len().min(self.meal_plan.len())
    }

    /// True once all seven days are present
    pub fn is_complete(&self) -> bool {
        self.days() >= PLAN_DAYS
    }

    /// Append the follow-up days produced by the second planner request
    ///
    /// Days already in the plan are skipped and neither list grows past
    /// [`PLAN_DAYS`], so a reply that repeats day 1 or runs long still yields
    /// a single week.
    pub fn extend_with(&mut self, remaining: FitnessPlan) {
        append_new_days(&mut self.workout_plan, remaining.workout_plan, |w| &w.day);
        append_new_days(&mut self.meal_plan, remaining.meal_plan, |m| &m.day);
    }

    /// Calorie and protein goals read from day 1 totals
    ///
    /// Returns `None` if there is no first day or its totals are not numeric.
    pub fn day_one_goals(&self) -> Option<DailyGoals> {
        let totals = &self.meal_plan.first()?.daily_totals;
        Some(DailyGoals {
            calories: parse_quantity(&totals.calories)?.round() as i32,
            protein: parse_quantity(&totals.protein)?.round() as i32,
        })
    }
}

fn append_new_days<T>(current: &mut Vec<T>, extra: Vec<T>, day: impl Fn(&T) -> &String) {
    for entry in extra {
        if current.len() >= PLAN_DAYS {
            break;
        }
        let name = day(&entry).trim();
        if !current.iter().any(|existing| day(existing).trim().eq_ignore_ascii_case(name)) {
            current.push(entry);
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn workout(day: &str, focus: &str) -> DailyWorkout {
        DailyWorkout {
            day: day.to_string(),
            focus: focus.to_string(),
            exercises: vec![Exercise {
                name: "Push-ups".to_string(),
                sets: "3".to_string(),
                reps: "10-12".to_string(),
                rest: "60s".to_string(),
                tips: "Keep your core tight.".to_string(),
            }],
        }
    }

    pub fn meal_day(day: &str, calories: &str, protein: &str) -> DailyMealPlan {
        DailyMealPlan {
            day: day.to_string(),
            meals: vec![Meal {
                name: "Breakfast".to_string(),
                description: "Oats with berries".to_string(),
                calories: "450 kcal".to_string(),
                macros: Macros {
                    protein: "20g".to_string(),
                    carbs: "60g".to_string(),
                    fat: "12g".to_string(),
                },
            }],
            daily_totals: DailyTotals {
                calories: calories.to_string(),
                protein: protein.to_string(),
                carbs: "250g".to_string(),
                fat: "70g".to_string(),
            },
        }
    }

    pub fn day_one_plan() -> FitnessPlan {
        FitnessPlan {
            workout_plan: vec![workout("Monday", "Upper Body Strength")],
            meal_plan: vec![meal_day("Monday", "2400 kcal", "150g")],
        }
    }

    pub fn remaining_plan() -> FitnessPlan {
        let days = ["Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
        let focuses = ["Cardio", "Lower Body", "Yoga", "HIIT", "Full Body", "Rest"];
        FitnessPlan {
            workout_plan: days.iter().zip(focuses).map(|(d, f)| workout(d, f)).collect(),
            meal_plan: days.iter().map(|d| meal_day(d, "2300 kcal", "140g")).collect(),
        }
    }
}
