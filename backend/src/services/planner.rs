//! Two-stage plan generation
//!
//! Stage 1 asks for day 1 and applies it as soon as it arrives. Stage 2
//! (days 2-7) runs as a spawned task and lands through
//! `RemainingPlanLoaded` / `RemainingPlanFailed`, tagged with the plan id
//! so a result for a replaced plan is dropped.

use crate::ai::{AiError, PlanClient, PLAN_FAILURE_MESSAGE};
use crate::error::ApiError;
use crate::state::AppState;
use fitplan_shared::estimation::maintenance_calories;
use fitplan_shared::plan::FitnessPlan;
use fitplan_shared::profile::UserProfile;
use fitplan_shared::session::{Action, Session};
use fitplan_shared::types::PlanResponse;
use fitplan_shared::validation::validate_profile;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Result of a plan request: the day-1 response plus the stage 2 task
pub struct PlanGeneration {
    pub response: PlanResponse,
    /// `None` when stage 1 already returned the full week
    pub follow_up: Option<JoinHandle<()>>,
}

/// Plan generation service
pub struct PlannerService;

impl PlannerService {
    /// Generate a plan for `profile`
    ///
    /// The session is only touched after stage 1 succeeds; a failed request
    /// leaves the previous plan in place.
    #[instrument(skip(state, profile), fields(goal = %profile.goal))]
    pub async fn generate_plan(
        state: &AppState,
        profile: UserProfile,
    ) -> Result<PlanGeneration, ApiError> {
        validate_profile(&profile)?;
        let client = state.ai()?;
        let maintenance = maintenance_calories(&profile);

        let plan = client
            .generate_initial_plan(&profile, maintenance)
            .await
            .map_err(|e| {
                warn!(error = %e, "Initial plan generation failed");
                ApiError::from(e)
            })?;

        let plan_id = Uuid::new_v4();
        let day_one = plan.clone();
        let needs_follow_up = !plan.is_complete();
        info!(%plan_id, days = plan.days(), maintenance, "Initial plan generated");

        state
            .dispatch(Action::PlanGenerated {
                plan_id,
                plan,
                profile: profile.clone(),
                maintenance,
            })
            .await;

        let follow_up = needs_follow_up.then(|| {
            Self::spawn_remaining(state.clone(), client, plan_id, profile, maintenance, day_one)
        });

        Ok(PlanGeneration {
            response: Self::current(state).await,
            follow_up,
        })
    }

    fn spawn_remaining(
        state: AppState,
        client: Arc<dyn PlanClient>,
        plan_id: Uuid,
        profile: UserProfile,
        maintenance: i32,
        initial_plan: FitnessPlan,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let action = match client
                .generate_remaining_plan(&profile, maintenance, &initial_plan)
                .await
                .and_then(|remaining| {
                    remaining
                        .ensure_not_empty()
                        .map(|_| remaining)
                        .map_err(|e| AiError::MalformedResponse(e.to_string()))
                }) {
                Ok(remaining) => {
                    info!(%plan_id, days = remaining.days(), "Remaining plan generated");
                    Action::RemainingPlanLoaded {
                        plan_id,
                        plan: remaining,
                    }
                }
                Err(e) => {
                    warn!(%plan_id, error = %e, "Remaining plan generation failed");
                    Action::RemainingPlanFailed {
                        plan_id,
                        message: PLAN_FAILURE_MESSAGE.to_string(),
                    }
                }
            };
            state.dispatch(action).await;
        })
    }

    /// Current plan and its progress
    pub async fn current(state: &AppState) -> PlanResponse {
        Self::response(&*state.session.read().await)
    }

    /// Drop the plan so a new one can be generated
    pub async fn clear(state: &AppState) -> PlanResponse {
        let mut session = state.session.write().await;
        session.apply(Action::ClearPlan);
        Self::response(&session)
    }

    fn response(session: &Session) -> PlanResponse {
        PlanResponse {
            plan_id: session.plan_id,
            status: session.plan_status.clone(),
            days_loaded: session.plan.as_ref().map(|p| p.days()).unwrap_or(0),
            plan: session.plan.clone(),
            maintenance_calories: session.log.maintenance_calories,
        }
    }
}
