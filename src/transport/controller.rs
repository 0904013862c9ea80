//! Transport controller: owns the current track index and the play/pause flag.

use crate::error::Result;
use crate::library::{Playlist, Track};

/// Navigation direction for `TransportController::advance`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Snapshot of the transport state.
///
/// `current_index` is always a valid index into the owning controller's playlist.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
}

/// The only owner of `PlaybackState`; every mutation goes through its methods.
#[derive(Debug, Clone)]
pub struct TransportController {
    playlist: Playlist,
    state: PlaybackState,
}

impl TransportController {
    /// Start paused on the first track.
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            state: PlaybackState::default(),
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn playlist_len(&self) -> usize {
        self.playlist.len()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist[self.state.current_index]
    }

    /// Flip the play/pause flag. The current index is left alone.
    pub fn toggle_play_pause(&mut self) -> bool {
        self.state.is_playing = !self.state.is_playing;
        log::debug!(
            "transport: {}",
            if self.state.is_playing { "playing" } else { "paused" }
        );
        self.state.is_playing
    }

    /// Move one track in `direction`, wrapping at both ends. Returns the new index.
    pub fn advance(&mut self, direction: Direction) -> usize {
        let len = self.playlist.len();
        let current = self.state.current_index;
        self.state.current_index = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        };
        log::debug!(
            "transport: {:?} {} -> {}",
            direction,
            current,
            self.state.current_index
        );
        self.state.current_index
    }

    /// Jump straight to `index`. Out-of-range indices leave the state untouched.
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        let index = self.playlist.check_index(index)?;
        log::debug!("transport: select {} -> {}", self.state.current_index, index);
        self.state.current_index = index;
        Ok(())
    }
}
