//! Input validation functions
//!
//! Range rules live on the types as `validator` derives; this module turns
//! their reports into a single [`ValidationError`] and adds the checks that
//! do not belong to one struct.

use crate::errors::ValidationError;
use crate::log::LoggedMeal;
use crate::profile::UserProfile;
use validator::{Validate, ValidationErrors};

/// Longest accepted food name for nutrition lookups
const MAX_FOOD_NAME_LEN: usize = 200;

/// Longest rest period a timer may be started with (10 minutes)
const MAX_REST_SECONDS: u32 = 600;

/// Collapse a validator report into its first field error
///
/// Fields are visited in name order so the reported error is stable.
fn first_error(errors: ValidationErrors) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                ValidationError::field(field, message)
            })
        })
        .unwrap_or_else(|| ValidationError::general("Invalid input"))
}

/// Validate a planner profile before a plan is requested
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if !profile.weight.is_finite() {
        return Err(ValidationError::field("weight", "Weight must be a valid number"));
    }
    if !profile.height.is_finite() {
        return Err(ValidationError::field("height", "Height must be a valid number"));
    }
    profile.validate().map_err(first_error)
}

/// Validate a meal before it is appended to the log
pub fn validate_meal(meal: &LoggedMeal) -> Result<(), ValidationError> {
    if meal.name.trim().is_empty() {
        return Err(ValidationError::field("name", "Meal name cannot be empty"));
    }
    let amounts = [meal.calories, meal.protein, meal.carbs, meal.fat];
    if amounts.iter().any(|v| !v.is_finite()) {
        return Err(ValidationError::general("Nutrition values must be valid numbers"));
    }
    meal.validate().map_err(first_error)
}

/// Validate a free-text food name for the nutrition lookup
pub fn validate_food_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::field("food", "Please enter a food name."));
    }
    if trimmed.chars().count() > MAX_FOOD_NAME_LEN {
        return Err(ValidationError::field("food", "Food name too long"));
    }
    Ok(())
}

/// Validate the length of a rest period in seconds
pub fn validate_rest_seconds(seconds: u32) -> Result<(), ValidationError> {
    if seconds == 0 {
        return Err(ValidationError::field("seconds", "Rest period must be at least 1 second"));
    }
    if seconds > MAX_REST_SECONDS {
        return Err(ValidationError::field("seconds", "Rest period cannot exceed 10 minutes"));
    }
    Ok(())
}

/// Validate a workout focus before toggling it
pub fn validate_focus(focus: &str) -> Result<(), ValidationError> {
    if focus.trim().is_empty() {
        return Err(ValidationError::field("focus", "Workout focus cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use proptest::prelude::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(validate_profile(&UserProfile::default()).is_ok());
    }

    #[test]
    fn test_profile_error_names_field() {
        let profile = UserProfile {
            height: 20.0,
            ..UserProfile::default()
        };
        let err = validate_profile(&profile).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("height"));
        assert!(err.message.contains("Height"));
    }

    #[test]
    fn test_first_error_is_stable() {
        let profile = UserProfile {
            age: 200,
            weight: 5.0,
            ..UserProfile::default()
        };
        let err = validate_profile(&profile).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("age"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let profile = UserProfile {
            weight: f64::NAN,
            ..UserProfile::default()
        };
        assert_eq!(
            validate_profile(&profile).unwrap_err().field.as_deref(),
            Some("weight")
        );
    }

    #[test]
    fn test_meal_validation() {
        let name: String = Word().fake();
        let meal = LoggedMeal {
            name,
            calories: 320.0,
            protein: 25.0,
            carbs: 30.0,
            fat: 9.0,
        };
        assert!(validate_meal(&meal).is_ok());

        let blank = LoggedMeal {
            name: "   ".to_string(),
            ..meal.clone()
        };
        assert!(validate_meal(&blank).is_err());

        let infinite = LoggedMeal {
            fat: f64::INFINITY,
            ..meal
        };
        assert!(validate_meal(&infinite).is_err());
    }

    #[test]
    fn test_food_name() {
        assert!(validate_food_name("1 cup of cooked rice").is_ok());
        assert!(validate_food_name("  ").is_err());
        assert!(validate_food_name(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_rest_seconds_bounds() {
        assert!(validate_rest_seconds(0).is_err());
        assert!(validate_rest_seconds(90).is_ok());
        assert!(validate_rest_seconds(601).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: profiles inside the documented ranges always pass
        #[test]
        fn prop_in_range_profiles_valid(
            age in 13u32..=120,
            weight in 30.0f64..=300.0,
            height in 100.0f64..=250.0
        ) {
            let profile = UserProfile { age, weight, height, ..UserProfile::default() };
            prop_assert!(validate_profile(&profile).is_ok());
        }

        /// Property: any negative weight is rejected
        #[test]
        fn prop_negative_weight_rejected(weight in -500.0f64..0.0) {
            let profile = UserProfile { weight, ..UserProfile::default() };
            prop_assert!(validate_profile(&profile).is_err());
        }
    }
}
