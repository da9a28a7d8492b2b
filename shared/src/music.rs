//! Workout playlist player state

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Song {
    fn new(title: &str, artist: &str, duration: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            duration: Some(duration.to_string()),
        }
    }
}

/// Songs plus the position of the player
///
/// `current_index` always points at a song when the list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub songs: Vec<Song>,
    pub current_index: usize,
    pub is_playing: bool,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(vec![
            Song::new("Warm-Up Pulse", "Tempo Collective", "3:42"),
            Song::new("Heavy Lifting", "Iron District", "4:05"),
            Song::new("Second Wind", "Redline Runners", "3:28"),
            Song::new("Final Set", "The Reps", "3:55"),
            Song::new("Cool Down", "Slow Tide", "5:10"),
        ])
    }
}

impl Playlist {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs,
            current_index: 0,
            is_playing: false,
        }
    }

    pub fn current(&self) -> Option<&Song> {
        self.songs.get(self.current_index)
    }

    /// Advance, wrapping from the last song to the first
    pub fn next(&mut self) {
        if !self.songs.is_empty() {
            self.current_index = (self.current_index + 1) % self.songs.len();
        }
    }

    /// Go back, wrapping from the first song to the last
    pub fn previous(&mut self) {
        let len = self.songs.len();
        if len > 0 {
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    /// Jump to a song; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.songs.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_wraps_to_start() {
        let mut playlist = Playlist::default();
        let last = playlist.songs.len() - 1;
        assert!(playlist.select(last));
        playlist.next();
        assert_eq!(playlist.current_index, 0);
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let mut playlist = Playlist::default();
        playlist.previous();
        assert_eq!(playlist.current_index, playlist.songs.len() - 1);
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut playlist = Playlist::default();
        playlist.next();
        assert!(!playlist.select(99));
        assert_eq!(playlist.current_index, 1);
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut playlist = Playlist::new(Vec::new());
        playlist.next();
        playlist.previous();
        assert_eq!(playlist.current_index, 0);
        assert!(playlist.current().is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: next then previous returns to the same song
        #[test]
        fn prop_next_previous_inverse(start in 0usize..5) {
            let mut playlist = Playlist::default();
            playlist.select(start);
            playlist.next();
            playlist.previous();
            prop_assert_eq!(playlist.current_index, start);
        }
    }
}
