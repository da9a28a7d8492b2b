//! Session state store
//!
//! One [`Session`] holds everything the app knows during a visit: the
//! planner form, the generated plan, the daily log, integration flags,
//! the active tab, the music player and the rest timer.
//!
//! State only changes through [`Session::apply`]. Each action is applied,
//! then derived fields are recomputed; `calories_burned` is written only
//! when its value actually changes.
//!
//! Time and randomness are inputs to actions (`now`, `increment`) so the
//! reducer stays deterministic under test.

use crate::estimation;
use crate::log::{DailyLog, Integration, IntegrationState, LoggedMeal};
use crate::music::Playlist;
use crate::plan::FitnessPlan;
use crate::profile::UserProfile;
use crate::rest_timer::RestTimer;
use crate::units::SleepDuration;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Planner,
    Insights,
    Me,
    LogMeal,
    Music,
}

/// Progress of the two-stage plan request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlanStatus {
    /// No plan requested yet, or the plan was cleared
    #[default]
    Empty,
    /// Day 1 is available, days 2-7 are still being generated
    Partial,
    Complete,
    /// The follow-up request failed; day 1 is still usable
    Failed { message: String },
}

/// User intents and async results applied to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LogMeal(LoggedMeal),
    ToggleWorkoutComplete(String),
    ToggleStepTracking,
    ToggleSleepTracking { now: DateTime<Utc> },
    SyncSteps { increment: u32 },
    StepTick { increment: u32 },
    ResetSteps,
    EditProfile(UserProfile),
    PlanGenerated {
        plan_id: Uuid,
        plan: FitnessPlan,
        profile: UserProfile,
        maintenance: i32,
    },
    RemainingPlanLoaded { plan_id: Uuid, plan: FitnessPlan },
    RemainingPlanFailed { plan_id: Uuid, message: String },
    ClearPlan,
    SelectTab(Tab),
    ToggleIntegration(Integration),
    NextTrack,
    PreviousTrack,
    SelectTrack(usize),
    TogglePlayback,
    StartRestTimer { label: String, seconds: u32 },
    RestTimerTick,
    CancelRestTimer,
}

/// Application state for one visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub profile: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<FitnessPlan>,
    pub plan_status: PlanStatus,
    pub log: DailyLog,
    pub integrations: IntegrationState,
    pub active_tab: Tab,
    pub playlist: Playlist,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_timer: Option<RestTimer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action, then run the calories-burned recompute
    ///
    /// Returns true if `calories_burned` was rewritten.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::LogMeal(meal) => self.log_meal(meal),
            Action::ToggleWorkoutComplete(focus) => self.toggle_workout_complete(focus),
            Action::ToggleStepTracking => {
                self.log.is_tracking_steps = !self.log.is_tracking_steps;
            }
            Action::ToggleSleepTracking { now } => self.toggle_sleep_tracking(now),
            Action::SyncSteps { increment } => {
                self.log.steps = self.log.steps.saturating_add(increment);
            }
            Action::StepTick { increment } => {
                if self.log.is_tracking_steps {
                    self.log.steps = self.log.steps.saturating_add(increment);
                }
            }
            Action::ResetSteps => self.log.steps = 0,
            Action::EditProfile(profile) => self.profile = profile,
            Action::PlanGenerated {
                plan_id,
                plan,
                profile,
                maintenance,
            } => self.plan_generated(plan_id, plan, profile, maintenance),
            Action::RemainingPlanLoaded { plan_id, plan } => {
                let awaiting = self.plan_id == Some(plan_id)
                    && !matches!(self.plan_status, PlanStatus::Complete);
                if awaiting {
                    if let Some(current) = self.plan.as_mut() {
                        current.extend_with(plan);
                        self.plan_status = PlanStatus::Complete;
                    }
                }
            }
            Action::RemainingPlanFailed { plan_id, message } => {
                if self.plan_id == Some(plan_id) {
                    self.plan_status = PlanStatus::Failed { message };
                }
            }
            Action::ClearPlan => {
                self.plan = None;
                self.plan_id = None;
                self.plan_status = PlanStatus::Empty;
            }
            Action::SelectTab(tab) => self.active_tab = tab,
            Action::ToggleIntegration(integration) => {
                self.integrations.toggle(integration);
            }
            Action::NextTrack => self.playlist.next(),
            Action::PreviousTrack => self.playlist.previous(),
            Action::SelectTrack(index) => {
                self.playlist.select(index);
            }
            Action::TogglePlayback => self.playlist.toggle_playback(),
            Action::StartRestTimer { label, seconds } => {
                self.rest_timer = Some(RestTimer::start(label, seconds));
            }
            Action::RestTimerTick => {
                if let Some(timer) = self.rest_timer.as_mut() {
                    timer.tick();
                }
            }
            Action::CancelRestTimer => self.rest_timer = None,
        }

        self.recompute_calories_burned()
    }

    /// Simulate a device sync, adding a step count drawn uniformly from `range`
    pub fn sync_steps<R: Rng>(&mut self, rng: &mut R, range: RangeInclusive<u32>) -> u32 {
        let increment = rng.gen_range(range);
        self.apply(Action::SyncSteps { increment });
        increment
    }

    /// Recompute calories burned, writing only on change
    pub fn recompute_calories_burned(&mut self) -> bool {
        let burned = estimation::calories_burned(
            self.log.steps,
            &self.log.workouts_completed,
            &self.log.sleep,
            self.log.weight,
        );
        if burned == self.log.calories_burned {
            return false;
        }
        self.log.calories_burned = burned;
        true
    }

    fn log_meal(&mut self, meal: LoggedMeal) {
        self.log.calories += meal.calories;
        self.log.protein += meal.protein;
        self.log.meals.push(meal);
    }

    fn toggle_workout_complete(&mut self, focus: String) {
        if !self.log.workouts_completed.remove(&focus) {
            self.log.workouts_completed.insert(focus);
        }
    }

    fn toggle_sleep_tracking(&mut self, now: DateTime<Utc>) {
        if self.log.is_tracking_sleep {
            if let Some(start) = self.log.sleep_start_time.take() {
                let elapsed = (now - start).num_minutes().max(0);
                let minutes = u32::try_from(elapsed).unwrap_or(u32::MAX);
                self.log.sleep = SleepDuration::from_minutes(minutes).to_string();
            }
            self.log.is_tracking_sleep = false;
        } else {
            self.log.is_tracking_sleep = true;
            self.log.sleep_start_time = Some(now);
        }
    }

    fn plan_generated(
        &mut self,
        plan_id: Uuid,
        plan: FitnessPlan,
        profile: UserProfile,
        maintenance: i32,
    ) {
        if let Some(goals) = plan.day_one_goals() {
            self.log.calories_goal = Some(goals.calories);
            self.log.protein_goal = Some(goals.protein);
        }
        self.log.maintenance_calories = Some(maintenance);
        self.log.weight = profile.weight;
        self.log.workouts_completed.clear();

        self.plan_status = if plan.is_complete() {
            PlanStatus::Complete
        } else {
            PlanStatus::Partial
        };
        self.plan_id = Some(plan_id);
        self.plan = Some(plan);
        self.profile = profile;
    }
}
