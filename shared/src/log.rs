//! Daily activity log and integration flags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

/// Nutrition facts for one serving, as returned by the food lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A meal recorded in the daily log
///
/// Logged meals are never edited once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoggedMeal {
    #[validate(length(min = 1, max = 200, message = "Meal name must be 1-200 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, max = 20000.0, message = "Calories must be between 0 and 20000"))]
    pub calories: f64,
    #[validate(range(min = 0.0, max = 2000.0, message = "Protein must be between 0 and 2000 g"))]
    pub protein: f64,
    #[validate(range(min = 0.0, max = 2000.0, message = "Carbs must be between 0 and 2000 g"))]
    pub carbs: f64,
    #[validate(range(min = 0.0, max = 2000.0, message = "Fat must be between 0 and 2000 g"))]
    pub fat: f64,
}

impl LoggedMeal {
    /// Attach a name to looked-up nutrition facts
    pub fn from_nutrition(name: impl Into<String>, info: NutritionInfo) -> Self {
        Self {
            name: name.into(),
            calories: info.calories,
            protein: info.protein,
            carbs: info.carbs,
            fat: info.fat,
        }
    }
}

/// Everything tracked for the current day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Calories eaten
    pub calories: f64,
    /// Protein eaten, grams
    pub protein: f64,
    pub steps: u32,
    /// Body weight, kg
    pub weight: f64,
    /// Sleep in `"Xh Ym"` form
    pub sleep: String,
    pub meals: Vec<LoggedMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_goal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_goal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_calories: Option<i32>,
    /// Derived from steps, workouts, sleep and weight
    pub calories_burned: i32,
    pub workouts_completed: BTreeSet<String>,
    pub is_tracking_steps: bool,
    pub is_tracking_sleep: bool,
    pub sleep_start_time: Option<DateTime<Utc>>,
}

impl Default for DailyLog {
    fn default() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            steps: 0,
            weight: 70.0,
            sleep: "0h 0m".to_string(),
            meals: Vec::new(),
            calories_goal: None,
            protein_goal: None,
            maintenance_calories: None,
            calories_burned: 0,
            workouts_completed: BTreeSet::new(),
            is_tracking_steps: false,
            is_tracking_sleep: false,
            sleep_start_time: None,
        }
    }
}

/// External services a user can link (flags only, no connection is made)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    Spotify,
    Youtube,
    AppleHealth,
    Fitbit,
}

impl Integration {
    pub const ALL: [Integration; 4] = [
        Integration::Spotify,
        Integration::Youtube,
        Integration::AppleHealth,
        Integration::Fitbit,
    ];
}

impl std::str::FromStr for Integration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "spotify" => Ok(Integration::Spotify),
            "youtube" => Ok(Integration::Youtube),
            "apple_health" | "applehealth" => Ok(Integration::AppleHealth),
            "fitbit" => Ok(Integration::Fitbit),
            _ => Err(format!("Unknown integration: {}", s)),
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Integration::Spotify => "Spotify",
            Integration::Youtube => "YouTube",
            Integration::AppleHealth => "Apple Health",
            Integration::Fitbit => "Fitbit",
        };
        f.write_str(name)
    }
}

/// Connection toggles per integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationState {
    pub spotify: bool,
    pub youtube: bool,
    pub apple_health: bool,
    pub fitbit: bool,
}

impl IntegrationState {
    fn flag_mut(&mut self, integration: Integration) -> &mut bool {
        match integration {
            Integration::Spotify => &mut self.spotify,
            Integration::Youtube => &mut self.youtube,
            Integration::AppleHealth => &mut self.apple_health,
            Integration::Fitbit => &mut self.fitbit,
        }
    }

    /// Flip one flag, returning its new value
    pub fn toggle(&mut self, integration: Integration) -> bool {
        let flag = self.flag_mut(integration);
        *flag = !*flag;
        *flag
    }

    pub fn is_connected(&self, integration: Integration) -> bool {
        match integration {
            Integration::Spotify => self.spotify,
            Integration::Youtube => self.youtube,
            Integration::AppleHealth => self.apple_health,
            Integration::Fitbit => self.fitbit,
        }
    }
}
