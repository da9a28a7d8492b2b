//! Session snapshot, active screen and tab selection

use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use fitplan_shared::session::{Action, Session};
use fitplan_shared::types::SelectTabRequest;
use fitplan_shared::views::Screen;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/screen", get(get_screen))
        .route("/tab", put(select_tab))
}

/// GET /api/v1/session - Full session state
async fn get_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.snapshot().await)
}

/// GET /api/v1/screen - View-model for the active tab
async fn get_screen(State(state): State<AppState>) -> Json<Screen> {
    Json(Screen::render(&*state.session.read().await))
}

/// PUT /api/v1/tab - Switch tabs and return the new screen
async fn select_tab(
    State(state): State<AppState>,
    Json(req): Json<SelectTabRequest>,
) -> Json<Screen> {
    let mut session = state.session.write().await;
    session.apply(Action::SelectTab(req.tab));
    Json(Screen::render(&session))
}
