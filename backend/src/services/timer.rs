//! Rest timer between exercise sets

use crate::error::ApiError;
use crate::services::scheduler::{ScheduledTask, TaskKind, TickOutcome};
use crate::state::AppState;
use fitplan_shared::errors::ValidationError;
use fitplan_shared::rest_timer::parse_rest_seconds;
use fitplan_shared::session::Action;
use fitplan_shared::types::{RestTimerResponse, StartRestTimerRequest};
use fitplan_shared::validation::validate_rest_seconds;
use std::time::Duration;
use tracing::{info, instrument};

const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Rest timer service
pub struct RestTimerService;

impl RestTimerService {
    /// Start (or restart) the countdown
    ///
    /// An explicit `seconds` wins; otherwise the exercise's rest text is parsed.
    #[instrument(skip(state, req), fields(label = %req.label))]
    pub async fn start(
        state: &AppState,
        req: StartRestTimerRequest,
    ) -> Result<RestTimerResponse, ApiError> {
        let label = req.label.trim();
        if label.is_empty() {
            return Err(ValidationError::field("label", "Timer label cannot be empty").into());
        }

        let seconds = match (req.seconds, req.rest.as_deref()) {
            (Some(seconds), _) => seconds,
            (None, Some(rest)) => parse_rest_seconds(rest).ok_or_else(|| {
                let message = format!("Could not read a rest period from '{}'", rest);
                ValidationError::field("rest", message)
            })?,
            (None, None) => {
                return Err(ApiError::BadRequest("Either seconds or rest is required".to_string()))
            }
        };
        validate_rest_seconds(seconds)?;

        state.tasks.cancel(TaskKind::RestTimer).await;
        state
            .dispatch(Action::StartRestTimer {
                label: label.to_string(),
                seconds,
            })
            .await;
        state
            .tasks
            .replace(TaskKind::RestTimer, Self::countdown(state.clone()))
            .await;
        info!(seconds, "Rest timer started");

        Ok(Self::current(state).await)
    }

    fn countdown(state: AppState) -> ScheduledTask {
        ScheduledTask::spawn_interval(COUNTDOWN_PERIOD, move || {
            let state = state.clone();
            async move {
                let mut session = state.session.write().await;
                session.apply(Action::RestTimerTick);
                match &session.rest_timer {
                    Some(timer) if timer.running => TickOutcome::Continue,
                    _ => TickOutcome::Stop,
                }
            }
        })
    }

    pub async fn cancel(state: &AppState) -> RestTimerResponse {
        state.tasks.cancel(TaskKind::RestTimer).await;
        state.dispatch(Action::CancelRestTimer).await;
        Self::current(state).await
    }

    pub async fn current(state: &AppState) -> RestTimerResponse {
        RestTimerResponse {
            timer: state.session.read().await.rest_timer.clone(),
        }
    }
}
