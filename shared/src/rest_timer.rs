//! Countdown between exercise sets

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

static REST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)(?:\s*-\s*\d+)?\s*(min|minute|minutes|m\b)?")
        .expect("rest pattern is a valid regex")
});

/// Read a rest period such as `"60s"`, `"90 sec"` or `"1-2 min"` into seconds
///
/// Ranges use their lower bound. Returns `None` if no number is present or
/// the period does not fit in a `u32` number of seconds.
pub fn parse_rest_seconds(rest: &str) -> Option<u32> {
    let captures = REST_PATTERN.captures(rest)?;
    let value: u32 = captures.get(1)?.as_str().parse().ok()?;
    if captures.get(2).is_some() {
        value.checked_mul(60)
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestTimer {
    pub label: String,
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub running: bool,
}

impl RestTimer {
    pub fn start(label: impl Into<String>, seconds: u32) -> Self {
        Self {
            label: label.into(),
            total_seconds: seconds,
            remaining_seconds: seconds,
            running: seconds > 0,
        }
    }

    /// Count down one second; stops at zero
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }
}
