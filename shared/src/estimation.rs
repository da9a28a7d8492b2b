//! Calorie estimation module
//!
//! Closed-form estimates used by the dashboard: maintenance calories from
//! the Harris-Benedict BMR, workout burn from MET values, and the step and
//! sleep contributions to calories burned.
//!
//! All functions are pure and never panic. Inputs are validated before they
//! reach this module; out-of-range values yield meaningless but finite output.

use crate::profile::{Gender, UserProfile};
use crate::units::SleepDuration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minutes assumed for every completed workout
pub const WORKOUT_DURATION_MINUTES: f64 = 60.0;

/// Calories burned per step
const CALORIES_PER_STEP: f64 = 0.04;

/// Sleep burn in kcal per kg of body weight per hour
const SLEEP_KCAL_PER_KG_HOUR: f64 = 0.95;

// ============================================================================
// MET Classification
// ============================================================================

/// Intensity class of a workout focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetCategory {
    /// Strength, upper/lower body, full body
    Strength,
    /// Cardio and HIIT
    Cardio,
    /// Yoga, flexibility and rest days
    Recovery,
    /// Anything else
    General,
}

impl MetCategory {
    /// Keywords checked in priority order; first category with a hit wins
    const KEYWORDS: [(MetCategory, &'static [&'static str]); 3] = [
        (MetCategory::Strength, &["strength", "upper", "lower", "full body"]),
        (MetCategory::Cardio, &["cardio", "hiit"]),
        (MetCategory::Recovery, &["yoga", "flexibility", "rest"]),
    ];

    /// MET value for this category
    pub fn met(&self) -> f64 {
        match self {
            MetCategory::Strength => 5.0,
            MetCategory::Cardio => 8.0,
            MetCategory::Recovery => 2.5,
            MetCategory::General => 3.5,
        }
    }

    /// Classify a workout focus string (case-insensitive substring match)
    pub fn classify(focus: &str) -> Self {
        let focus = focus.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| focus.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(MetCategory::General)
    }
}

// ============================================================================
// Burn Estimates
// ============================================================================

/// Estimate calories burned by a workout
///
/// Formula: round((MET × 3.5 × weight(kg) / 200) × minutes)
pub fn estimate_workout_calories(focus: &str, duration_minutes: f64, weight_kg: f64) -> i32 {
    let met = MetCategory::classify(focus).met();
    ((met * 3.5 * weight_kg / 200.0) * duration_minutes).round() as i32
}

/// Estimate calories burned by walking
pub fn estimate_step_calories(steps: u32) -> i32 {
    (steps as f64 * CALORIES_PER_STEP).round() as i32
}

/// Estimate calories burned while asleep
pub fn estimate_sleep_calories(hours: f64, weight_kg: f64) -> i32 {
    (hours * weight_kg * SLEEP_KCAL_PER_KG_HOUR).round() as i32
}

/// Total calories burned for the day
///
/// Every completed workout counts for [`WORKOUT_DURATION_MINUTES`]. A sleep
/// string that does not match the `"XhYm"` format contributes nothing.
pub fn calories_burned(
    steps: u32,
    workouts_completed: &BTreeSet<String>,
    sleep: &str,
    weight_kg: f64,
) -> i32 {
    let workouts: i32 = workouts_completed
        .iter()
        .map(|focus| estimate_workout_calories(focus, WORKOUT_DURATION_MINUTES, weight_kg))
        .sum();
    let sleep_calories = SleepDuration::parse(sleep)
        .map(|d| estimate_sleep_calories(d.as_hours(), weight_kg))
        .unwrap_or(0);

    estimate_step_calories(steps) + workouts + sleep_calories
}

// ============================================================================
// BMR and Maintenance
// ============================================================================

/// Calculate BMR using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
) -> f64 {
    let age = age_years as f64;
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Daily maintenance calories: BMR × activity multiplier, rounded
pub fn maintenance_calories(profile: &UserProfile) -> i32 {
    (profile_bmr(profile) * profile.activity_level.multiplier()).round() as i32
}

fn profile_bmr(profile: &UserProfile) -> f64 {
    calculate_bmr_harris_benedict(profile.weight, profile.height, profile.age, profile.gender)
}

/// Maintenance breakdown returned alongside a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEstimate {
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub maintenance_calories: i32,
}

impl MaintenanceEstimate {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            bmr: profile_bmr(profile),
            activity_multiplier: profile.activity_level.multiplier(),
            maintenance_calories: maintenance_calories(profile),
        }
    }
}
