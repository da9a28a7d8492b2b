//! User profile types for the planner form
//!
//! The profile is everything the plan request and the maintenance-calorie
//! estimate need: body measurements in SI units, an activity level, a goal
//! and a dietary preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Gender used for the Harris-Benedict coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Activity level for the maintenance-calorie multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise/sports 1-3 days/week
    Light,
    /// Moderate exercise/sports 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise/sports 6-7 days a week
    Active,
    /// Very hard exercise/sports and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (light exercise/sports 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (moderate exercise/sports 3-5 days/week)",
            ActivityLevel::Active => "Active (hard exercise/sports 6-7 days a week)",
            ActivityLevel::VeryActive => "Very Active (very hard exercise/sports & physical job)",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    MaintainWeight,
    #[default]
    GainMuscle,
    GainStrength,
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitnessGoal::LoseWeight => "lose_weight",
            FitnessGoal::MaintainWeight => "maintain_weight",
            FitnessGoal::GainMuscle => "gain_muscle",
            FitnessGoal::GainStrength => "gain_strength",
        };
        f.write_str(label)
    }
}

/// Dietary preference passed to the meal planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Keto,
    Pescetarian,
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DietaryPreference::Omnivore => "omnivore",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Keto => "keto",
            DietaryPreference::Pescetarian => "pescetarian",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// Planner form state
///
/// Weight is in kilograms, height in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(range(min = 13, max = 120, message = "Age must be between 13 and 120"))]
    pub age: u32,
    #[validate(range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg"))]
    pub weight: f64,
    #[validate(range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm"))]
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: FitnessGoal::GainMuscle,
            dietary_preference: DietaryPreference::Omnivore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_form() {
        let profile = UserProfile::default();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.weight, 70.0);
        assert_eq!(profile.height, 175.0);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profile_wire_format() {
        let json = r#"{
            "age": 41,
            "weight": 82,
            "height": 180,
            "gender": "female",
            "activityLevel": "very_active",
            "goal": "lose_weight",
            "dietaryPreference": "keto"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, FitnessGoal::LoseWeight);
        assert_eq!(profile.dietary_preference, DietaryPreference::Keto);
    }

    #[test]
    fn test_dietary_preference_defaults_when_missing() {
        let json = r#"{
            "age": 30,
            "weight": 70,
            "height": 175,
            "gender": "male",
            "activityLevel": "light",
            "goal": "gain_strength"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.dietary_preference, DietaryPreference::Omnivore);
    }

    #[test]
    fn test_out_of_range_profile_rejected() {
        let profile = UserProfile {
            age: 5,
            weight: -3.0,
            ..UserProfile::default()
        };
        let errors = profile.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("weight"));
    }

    #[test]
    fn test_activity_multipliers_increase() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
        assert_eq!(ActivityLevel::VeryActive.to_string(), "very_active");
    }
}
