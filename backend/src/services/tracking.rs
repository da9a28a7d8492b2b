//! Step and sleep tracking
//!
//! Step tracking drives a live ticker task that adds a small random
//! increment on every tick while tracking is on. Device sync adds a larger
//! random increment once.

use crate::services::scheduler::{ScheduledTask, TaskKind, TickOutcome};
use crate::state::AppState;
use chrono::Utc;
use fitplan_shared::session::{Action, Session};
use fitplan_shared::types::{StepsResponse, ToggleResponse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Step and sleep tracking service
pub struct TrackingService;

impl TrackingService {
    /// Flip step tracking, starting or stopping the live ticker
    #[instrument(skip(state))]
    pub async fn toggle_step_tracking(state: &AppState) -> StepsResponse {
        let tracking = {
            let mut session = state.session.write().await;
            session.apply(Action::ToggleStepTracking);
            session.log.is_tracking_steps
        };

        if tracking {
            info!("Step tracking started");
            state
                .tasks
                .replace(TaskKind::StepTicker, Self::step_ticker(state.clone()))
                .await;
        } else {
            info!("Step tracking stopped");
            state.tasks.cancel(TaskKind::StepTicker).await;
        }

        Self::steps(state, None).await
    }

    fn step_ticker(state: AppState) -> ScheduledTask {
        let tracking = state.config().tracking.clone();
        let mut rng = StdRng::from_entropy();

        ScheduledTask::spawn_interval(tracking.step_tick_interval(), move || {
            let increment = rng.gen_range(0..=tracking.step_tick_max_increment);
            let state = state.clone();
            async move {
                let mut session = state.session.write().await;
                if !session.log.is_tracking_steps {
                    return TickOutcome::Stop;
                }
                session.apply(Action::StepTick { increment });
                TickOutcome::Continue
            }
        })
    }

    /// Simulate a device sync
    #[instrument(skip(state))]
    pub async fn sync_steps(state: &AppState) -> StepsResponse {
        let range = state.config().tracking.sync_range();
        let mut session = state.session.write().await;
        let increment = session.sync_steps(&mut rand::thread_rng(), range);
        debug!(increment, "Steps synced");
        Self::steps_of(&session, Some(increment))
    }

    pub async fn reset_steps(state: &AppState) -> StepsResponse {
        state.dispatch(Action::ResetSteps).await;
        Self::steps(state, None).await
    }

    /// Flip sleep tracking; stopping records the elapsed time as last night's sleep
    #[instrument(skip(state))]
    pub async fn toggle_sleep_tracking(state: &AppState) -> ToggleResponse {
        let mut session = state.session.write().await;
        session.apply(Action::ToggleSleepTracking { now: Utc::now() });
        if !session.log.is_tracking_sleep {
            info!(sleep = %session.log.sleep, "Sleep tracking stopped");
        }
        ToggleResponse {
            enabled: session.log.is_tracking_sleep,
        }
    }

    async fn steps(state: &AppState, added: Option<u32>) -> StepsResponse {
        Self::steps_of(&*state.session.read().await, added)
    }

    fn steps_of(session: &Session, added: Option<u32>) -> StepsResponse {
        StepsResponse {
            steps: session.log.steps,
            added,
            is_tracking: session.log.is_tracking_steps,
            calories_burned: session.log.calories_burned,
        }
    }
}
