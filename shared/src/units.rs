//! Duration and quantity formats carried as strings
//!
//! The daily log stores sleep as `"Xh Ym"`, and the AI plan schema returns
//! calories and macros as free-form strings such as `"450 kcal"` or `"30g"`.
//! This module converts between those strings and numbers.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static SLEEP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*h\s*(\d+)\s*m").expect("sleep pattern is a valid regex")
});

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern is a valid regex"));

// ============================================================================
// Sleep Duration
// ============================================================================

/// Hours and minutes of sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SleepDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl SleepDuration {
    /// Build from a whole number of elapsed minutes
    pub fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }

    /// Parse the `"XhYm"` log format (spaces optional)
    ///
    /// Returns `None` when the pattern does not match.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = SLEEP_PATTERN.captures(value)?;
        let hours = captures.get(1)?.as_str().parse().ok()?;
        let minutes = captures.get(2)?.as_str().parse().ok()?;
        Some(Self { hours, minutes })
    }

    /// Duration in fractional hours
    pub fn as_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

// ============================================================================
// Quantity strings
// ============================================================================

/// Read the first number out of a quantity string
///
/// `"2,150 kcal"` is read as 2150; thousands separators are dropped before
/// matching.
pub fn parse_quantity(value: &str) -> Option<f64> {
    let cleaned = value.replace(',', "");
    LEADING_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("7h 45m", Some((7, 45)))]
    #[case("0h 0m", Some((0, 0)))]
    #[case("8h30m", Some((8, 30)))]
    #[case("10 h 5 m", Some((10, 5)))]
    #[case("seven hours", None)]
    #[case("", None)]
    fn test_parse_sleep(#[case] input: &str, #[case] expected: Option<(u32, u32)>) {
        let parsed = SleepDuration::parse(input).map(|d| (d.hours, d.minutes));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_sleep_display() {
        assert_eq!(SleepDuration::from_minutes(90).to_string(), "1h 30m");
        assert_eq!(SleepDuration::from_minutes(0).to_string(), "0h 0m");
        assert_eq!(SleepDuration::from_minutes(465).to_string(), "7h 45m");
    }

    #[test]
    fn test_sleep_as_hours() {
        let sleep = SleepDuration { hours: 7, minutes: 30 };
        assert!((sleep.as_hours() - 7.5).abs() < 1e-9);
    }

    #[rstest]
    #[case("450 kcal", Some(450.0))]
    #[case("30g", Some(30.0))]
    #[case("2,150", Some(2150.0))]
    #[case("approx. 12.5 g", Some(12.5))]
    #[case("n/a", None)]
    fn test_parse_quantity(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_quantity(input), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Formatted durations parse back to the same minutes
        #[test]
        fn prop_formatted_sleep_parses(minutes in 0u32..5000) {
            let duration = SleepDuration::from_minutes(minutes);
            let parsed = SleepDuration::parse(&duration.to_string());
            prop_assert_eq!(parsed, Some(duration));
        }
    }
}
