//! Music player routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitplan_shared::music::Playlist;
use fitplan_shared::session::Action;

pub fn music_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_playlist))
        .route("/next", post(next_track))
        .route("/previous", post(previous_track))
        .route("/play", post(toggle_playback))
        .route("/select/:index", post(select_track))
}

async fn apply(state: &AppState, action: Action) -> Json<Playlist> {
    let mut session = state.session.write().await;
    session.apply(action);
    Json(session.playlist.clone())
}

/// GET /api/v1/music
async fn get_playlist(State(state): State<AppState>) -> Json<Playlist> {
    Json(state.session.read().await.playlist.clone())
}

/// POST /api/v1/music/next - Wraps to the first song
async fn next_track(State(state): State<AppState>) -> Json<Playlist> {
    apply(&state, Action::NextTrack).await
}

/// POST /api/v1/music/previous - Wraps to the last song
async fn previous_track(State(state): State<AppState>) -> Json<Playlist> {
    apply(&state, Action::PreviousTrack).await
}

/// POST /api/v1/music/play - Toggle play/pause
async fn toggle_playback(State(state): State<AppState>) -> Json<Playlist> {
    apply(&state, Action::TogglePlayback).await
}

/// POST /api/v1/music/select/:index
async fn select_track(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Playlist>, ApiError> {
    let songs = state.session.read().await.playlist.songs.len();
    if index >= songs {
        return Err(ApiError::NotFound(format!("No song at index {}", index)));
    }
    Ok(apply(&state, Action::SelectTrack(index)).await)
}
