//! FitPlan WASM Module
//!
//! WebAssembly bindings for the calorie estimates so the browser can show
//! live numbers without a round trip to the backend.

use fitplan_shared::dashboard::CalorieSummary;
use fitplan_shared::estimation::{
    estimate_sleep_calories, estimate_step_calories, estimate_workout_calories,
};
use fitplan_shared::log::DailyLog;
use fitplan_shared::profile::UserProfile;
use fitplan_shared::rest_timer::parse_rest_seconds;
use fitplan_shared::session::Session;
use fitplan_shared::units::SleepDuration;
use fitplan_shared::views::Screen;
use wasm_bindgen::prelude::*;

/// Calories burned by a workout of the given focus
#[wasm_bindgen]
pub fn workout_calories(focus: &str, duration_minutes: f64, weight_kg: f64) -> i32 {
    estimate_workout_calories(focus, duration_minutes, weight_kg)
}

/// Calories burned by walking
#[wasm_bindgen]
pub fn step_calories(steps: u32) -> i32 {
    estimate_step_calories(steps)
}

/// Calories burned while asleep, from an "Xh Ym" string
///
/// Returns 0 when the string does not parse.
#[wasm_bindgen]
pub fn sleep_calories(sleep: &str, weight_kg: f64) -> i32 {
    SleepDuration::parse(sleep)
        .map(|d| estimate_sleep_calories(d.as_hours(), weight_kg))
        .unwrap_or(0)
}

/// Maintenance calories for a JSON-encoded planner profile
#[wasm_bindgen]
pub fn maintenance_calories(profile_json: &str) -> Result<i32, JsError> {
    let profile: UserProfile = serde_json::from_str(profile_json)?;
    Ok(fitplan_shared::estimation::maintenance_calories(&profile))
}

/// Rest period in seconds from free text such as "60-90 seconds"
///
/// Returns 0 when no duration can be read.
#[wasm_bindgen]
pub fn rest_seconds(rest: &str) -> u32 {
    parse_rest_seconds(rest).unwrap_or(0)
}

/// Dashboard calorie summary for a JSON-encoded daily log
#[wasm_bindgen]
pub fn calorie_summary(log_json: &str) -> Result<String, JsError> {
    let log: DailyLog = serde_json::from_str(log_json)?;
    Ok(serde_json::to_string(&CalorieSummary::from_log(&log))?)
}

/// View-model for the active tab of a JSON-encoded session
#[wasm_bindgen]
pub fn render_screen(session_json: &str) -> Result<String, JsError> {
    let session: Session = serde_json::from_str(session_json)?;
    Ok(serde_json::to_string(&Screen::render(&session))?)
}
