//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a fresh session. AI-backed tests point the real
//! Gemini client at a wiremock server.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitplan_backend::{
    config::{AiConfig, AppConfig, ServerConfig, TrackingConfig},
    routes,
    state::AppState,
};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// App with no AI credential
    pub fn new() -> Self {
        Self::from_config(test_config(None))
    }

    /// App whose Gemini client talks to `base_url`
    pub fn with_ai_base_url(base_url: &str) -> Self {
        Self::from_config(test_config(Some(base_url)))
    }

    fn from_config(config: AppConfig) -> Self {
        let state = AppState::new(config).expect("Failed to build app state");
        let app = routes::create_router(state.clone());
        Self { app, state }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None).await
    }

    async fn send(&self, method: &str, path: &str, body: Option<&str>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// Parse a response body as JSON
pub fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("Response body is not JSON")
}

fn test_config(base_url: Option<&str>) -> AppConfig {
    let ai = match base_url {
        Some(url) => AiConfig {
            api_key: Some(SecretString::new("test-api-key".to_string())),
            base_url: url.to_string(),
            timeout_secs: 5,
            ..AiConfig::default()
        },
        None => AiConfig::default(),
    };

    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        ai,
        tracking: TrackingConfig {
            step_tick_millis: 20,
            ..TrackingConfig::default()
        },
    }
}
