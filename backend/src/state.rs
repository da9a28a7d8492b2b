//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The session is guarded by a single `RwLock`; every mutation goes through
//! [`AppState::dispatch`] so actions are applied one at a time. Handlers
//! never hold the lock across an AI call.

use crate::ai::{AiError, GeminiClient, PlanClient};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::services::scheduler::TaskRegistry;
use fitplan_shared::session::{Action, Session};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Shared application state
///
/// All fields are `Arc`s so cloning into handlers and spawned tasks is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The one session this backend serves
    pub session: Arc<RwLock<Session>>,
    /// AI client; `None` when no credential is configured
    pub ai: Option<Arc<dyn PlanClient>>,
    /// Step ticker and rest timer tasks
    pub tasks: Arc<TaskRegistry>,
}

impl AppState {
    /// Create state from configuration, building the Gemini client if a
    /// credential is available
    pub fn new(config: AppConfig) -> Result<Self, AiError> {
        let ai: Option<Arc<dyn PlanClient>> = match GeminiClient::new(&config.ai) {
            Ok(client) => Some(Arc::new(client)),
            Err(AiError::MissingCredential) => {
                warn!("No AI API key configured; plan, nutrition and forecast requests will fail");
                None
            }
            Err(e) => return Err(e),
        };
        Ok(Self::with_client(config, ai))
    }

    /// Create state around an explicit client (or none)
    pub fn with_client(config: AppConfig, ai: Option<Arc<dyn PlanClient>>) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(Session::new())),
            ai,
            tasks: Arc::new(TaskRegistry::new()),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The AI client, or a configuration error if none is set up
    pub fn ai(&self) -> Result<Arc<dyn PlanClient>, ApiError> {
        self.ai
            .clone()
            .ok_or_else(|| ApiError::from(AiError::MissingCredential))
    }

    /// Apply one action under the write lock
    ///
    /// Returns whether calories burned changed.
    pub async fn dispatch(&self, action: Action) -> bool {
        self.session.write().await.apply(action)
    }

    /// Clone of the current session
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_shared::session::Tab;

    #[test]
    fn test_state_without_key_has_no_client() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(state.ai.is_none());
        assert!(matches!(state.ai(), Err(ApiError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_state_clone_shares_session() {
        let state = AppState::with_client(AppConfig::default(), None);
        let cloned = state.clone();

        cloned.dispatch(Action::SelectTab(Tab::Music)).await;
        assert_eq!(state.snapshot().await.active_tab, Tab::Music);
    }
}
