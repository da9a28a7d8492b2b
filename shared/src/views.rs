//! Per-tab view-models
//!
//! [`Screen::render`] turns the session into the data a tab needs, picking
//! the variant by matching on the active [`Tab`].

use crate::dashboard::CalorieSummary;
use crate::estimation::{estimate_workout_calories, MaintenanceEstimate, WORKOUT_DURATION_MINUTES};
use crate::log::{Integration, IntegrationState, LoggedMeal};
use crate::music::Song;
use crate::plan::FitnessPlan;
use crate::profile::UserProfile;
use crate::rest_timer::RestTimer;
use crate::session::{PlanStatus, Session, Tab};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutCard {
    pub day: String,
    pub focus: String,
    pub completed: bool,
    pub estimated_calories: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeScreen {
    pub todays_focus: Option<String>,
    pub calories: CalorieSummary,
    pub steps: u32,
    pub sleep: String,
    pub is_tracking_steps: bool,
    pub is_tracking_sleep: bool,
    pub workouts: Vec<WorkoutCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_timer: Option<RestTimer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerScreen {
    pub profile: UserProfile,
    pub maintenance: MaintenanceEstimate,
    pub status: PlanStatus,
    pub days_loaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<FitnessPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsScreen {
    pub calories_eaten: f64,
    pub calories_burned: i32,
    pub protein: f64,
    pub protein_goal: Option<i32>,
    pub steps: u32,
    pub sleep: String,
    pub weight: f64,
    pub workouts_completed: usize,
    pub meals_logged: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationView {
    pub integration: Integration,
    pub name: String,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScreen {
    pub profile: UserProfile,
    pub integrations: Vec<IntegrationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealScreen {
    pub meals: Vec<LoggedMeal>,
    pub total_calories: f64,
    pub total_protein: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicScreen {
    pub current: Option<Song>,
    pub current_index: usize,
    pub is_playing: bool,
    pub songs: Vec<Song>,
}

/// View-model for whichever tab is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum Screen {
    Home(HomeScreen),
    Planner(PlannerScreen),
    Insights(InsightsScreen),
    Me(ProfileScreen),
    LogMeal(LogMealScreen),
    Music(MusicScreen),
}

impl Screen {
    pub fn render(session: &Session) -> Self {
        match session.active_tab {
            Tab::Home => Screen::Home(home(session)),
            Tab::Planner => Screen::Planner(planner(session)),
            Tab::Insights => Screen::Insights(insights(session)),
            Tab::Me => Screen::Me(profile(session)),
            Tab::LogMeal => Screen::LogMeal(LogMealScreen {
                meals: session.log.meals.clone(),
                total_calories: session.log.calories,
                total_protein: session.log.protein,
            }),
            Tab::Music => Screen::Music(MusicScreen {
                current: session.playlist.current().cloned(),
                current_index: session.playlist.current_index,
                is_playing: session.playlist.is_playing,
                songs: session.playlist.songs.clone(),
            }),
        }
    }
}

fn home(session: &Session) -> HomeScreen {
    let log = &session.log;
    let workouts = session
        .plan
        .as_ref()
        .map(|plan| {
            plan.workout_plan
                .iter()
                .map(|w| WorkoutCard {
                    day: w.day.clone(),
                    focus: w.focus.clone(),
                    completed: log.workouts_completed.contains(&w.focus),
                    estimated_calories: estimate_workout_calories(
                        &w.focus,
                        WORKOUT_DURATION_MINUTES,
                        log.weight,
                    ),
                })
                .collect()
        })
        .unwrap_or_default();

    HomeScreen {
        todays_focus: session
            .plan
            .as_ref()
            .and_then(|p| p.workout_plan.first())
            .map(|w| w.focus.clone()),
        calories: CalorieSummary::from_log(log),
        steps: log.steps,
        sleep: log.sleep.clone(),
        is_tracking_steps: log.is_tracking_steps,
        is_tracking_sleep: log.is_tracking_sleep,
        workouts,
        rest_timer: session.rest_timer.clone(),
    }
}

fn planner(session: &Session) -> PlannerScreen {
    PlannerScreen {
        profile: session.profile.clone(),
        maintenance: MaintenanceEstimate::for_profile(&session.profile),
        status: session.plan_status.clone(),
        days_loaded: session.plan.as_ref().map(|p| p.days()).unwrap_or(0),
        plan: session.plan.clone(),
    }
}

fn insights(session: &Session) -> InsightsScreen {
    let log = &session.log;
    InsightsScreen {
        calories_eaten: log.calories,
        calories_burned: log.calories_burned,
        protein: log.protein,
        protein_goal: log.protein_goal,
        steps: log.steps,
        sleep: log.sleep.clone(),
        weight: log.weight,
        workouts_completed: log.workouts_completed.len(),
        meals_logged: log.meals.len(),
    }
}

/// Every integration with its connection flag, in display order
pub fn integration_views(state: &IntegrationState) -> Vec<IntegrationView> {
    Integration::ALL
        .into_iter()
        .map(|integration| IntegrationView {
            integration,
            name: integration.to_string(),
            connected: state.is_connected(integration),
        })
        .collect()
}

fn profile(session: &Session) -> ProfileScreen {
    ProfileScreen {
        profile: session.profile.clone(),
        integrations: integration_views(&session.integrations),
    }
}
