//! Calorie tracker summary for the home dashboard

use crate::log::DailyLog;
use serde::{Deserialize, Serialize};

/// Intake vs goal, adjusted for calories burned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieSummary {
    pub eaten: f64,
    pub burned: i32,
    pub goal: i32,
    /// goal - eaten + burned; negative once over budget
    pub remaining: f64,
    /// eaten / goal as a percentage, 0 without a goal
    pub percentage: f64,
    pub is_over: bool,
    pub status_message: String,
    pub maintenance_calories: i32,
}

impl CalorieSummary {
    pub fn from_log(log: &DailyLog) -> Self {
        let goal = log.calories_goal.unwrap_or(0);
        let remaining = goal as f64 - log.calories + log.calories_burned as f64;
        let percentage = if goal > 0 {
            log.calories / goal as f64 * 100.0
        } else {
            0.0
        };
        let status_message = if remaining < 0.0 {
            "You're over your goal. Consider a light walk!".to_string()
        } else {
            "You're on track. Keep it up!".to_string()
        };

        Self {
            eaten: log.calories,
            burned: log.calories_burned,
            goal,
            remaining,
            percentage,
            is_over: log.calories > goal as f64,
            status_message,
            maintenance_calories: log.maintenance_calories.unwrap_or(0),
        }
    }
}
