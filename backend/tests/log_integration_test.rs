//! Integration tests for the daily log, trackers, timer and player

mod common;

use axum::http::StatusCode;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rstest::rstest;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_meals_accumulate_in_order() {
    let app = common::TestApp::new();
    let names: Vec<String> = (0..3).map(|_| Word().fake()).collect();

    for name in &names {
        let meal = json!({
            "name": name,
            "calories": 200.0,
            "protein": 10.0,
            "carbs": 20.0,
            "fat": 5.0
        });
        let (status, _) = app.post("/api/v1/log/meals", &meal.to_string()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.get("/api/v1/log").await;
    let log = common::json(&body)["log"].clone();
    assert_eq!(log["calories"], 600.0);
    assert_eq!(log["protein"], 30.0);

    let logged: Vec<&str> = log["meals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(logged, names.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_invalid_meal_is_not_logged() {
    let app = common::TestApp::new();
    let meal = json!({
        "name": "Mystery",
        "calories": -50.0,
        "protein": 0.0,
        "carbs": 0.0,
        "fat": 0.0
    });

    let (status, body) = app.post("/api/v1/log/meals", &meal.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::json(&body)["error"]["code"], "VALIDATION_ERROR");

    let (_, log) = app.get("/api/v1/log").await;
    assert!(common::json(&log)["log"]["meals"].as_array().unwrap().is_empty());
}

#[rstest]
#[case("Upper Body Strength")]
#[case("Cardio")]
#[case("Rest")]
#[tokio::test]
async fn test_workout_toggle_is_symmetric(#[case] focus: &str) {
    let app = common::TestApp::new();
    let body = json!({ "focus": focus }).to_string();

    let (status, on) = app.post("/api/v1/log/workouts/toggle", &body).await;
    assert_eq!(status, StatusCode::OK);
    let on = common::json(&on);
    assert_eq!(on["log"]["workoutsCompleted"][0], focus);

    let (_, off) = app.post("/api/v1/log/workouts/toggle", &body).await;
    let off = common::json(&off);
    assert!(off["log"]["workoutsCompleted"].as_array().unwrap().is_empty());
    assert_eq!(off["log"]["caloriesBurned"], 0);
}

#[tokio::test]
async fn test_device_sync_adds_steps_within_range() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/log/steps/sync", "").await;
    assert_eq!(status, StatusCode::OK);

    let synced = common::json(&body);
    let added = synced["added"].as_u64().unwrap();
    assert!((500..=1500).contains(&added));
    assert_eq!(synced["steps"].as_u64().unwrap(), added);
    assert!(synced["caloriesBurned"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_step_tracking_starts_and_stops_ticker() {
    let app = common::TestApp::new();

    let (_, started) = app.post("/api/v1/log/steps/tracking", "").await;
    assert_eq!(common::json(&started)["isTracking"], true);

    tokio::time::sleep(Duration::from_millis(100)).await;

    let (_, stopped) = app.post("/api/v1/log/steps/tracking", "").await;
    let stopped = common::json(&stopped);
    assert_eq!(stopped["isTracking"], false);

    let frozen = stopped["steps"].as_u64().unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(app.state.snapshot().await.log.steps as u64, frozen);
}

#[tokio::test]
async fn test_sleep_tracking_round_trip() {
    let app = common::TestApp::new();

    let (_, started) = app.post("/api/v1/log/sleep/tracking", "").await;
    assert_eq!(common::json(&started)["enabled"], true);

    let (_, stopped) = app.post("/api/v1/log/sleep/tracking", "").await;
    assert_eq!(common::json(&stopped)["enabled"], false);

    let sleep = app.state.snapshot().await.log.sleep;
    assert_eq!(sleep, "0h 0m");
}

#[tokio::test]
async fn test_rest_timer_seconds_override_text() {
    let app = common::TestApp::new();
    let body = json!({ "label": "Deadlift", "seconds": 45, "rest": "2 min" }).to_string();

    let (status, started) = app.post("/api/v1/timer/rest", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json(&started)["timer"]["totalSeconds"], 45);

    let (_, current) = app.get("/api/v1/timer/rest").await;
    assert_eq!(common::json(&current)["timer"]["label"], "Deadlift");
}

#[tokio::test]
async fn test_rest_timer_rejects_unparseable_rest() {
    let app = common::TestApp::new();
    let body = json!({ "label": "Plank", "rest": "as needed" }).to_string();

    let (status, _) = app.post("/api/v1/timer/rest", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rest_timer_rejects_rest_beyond_range() {
    let app = common::TestApp::new();
    let body = json!({ "label": "Plank", "rest": "80000000 min" }).to_string();

    let (status, response) = app.post("/api/v1/timer/rest", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = common::json(&response)["error"].clone();
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["field"], "rest");

    let (_, current) = app.get("/api/v1/timer/rest").await;
    assert!(common::json(&current).get("timer").is_none());
}

#[tokio::test]
async fn test_music_next_wraps_around() {
    let app = common::TestApp::new();
    let (_, playlist) = app.get("/api/v1/music").await;
    let songs = common::json(&playlist)["songs"].as_array().unwrap().len();

    let mut last = serde_json::Value::Null;
    for _ in 0..songs {
        let (_, body) = app.post("/api/v1/music/next", "").await;
        last = common::json(&body);
    }
    assert_eq!(last["currentIndex"], 0);
}

#[tokio::test]
async fn test_integrations_toggle() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/integrations/apple-health/toggle", "").await;
    assert_eq!(status, StatusCode::OK);

    let integrations = common::json(&body)["integrations"].clone();
    let apple = integrations
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == "Apple Health")
        .cloned()
        .unwrap();
    assert_eq!(apple["connected"], true);
}
