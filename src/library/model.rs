use std::ops::Index;

use serde::Deserialize;

use crate::error::{PlayerError, Result};

/// A single playlist entry. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    title: String,
    #[serde(default)]
    artist: String,
    /// Opaque artwork reference (path or URI). Never loaded or validated.
    #[serde(default, rename = "cover", alias = "cover_ref")]
    cover_ref: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        cover_ref: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            cover_ref: cover_ref.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn cover_ref(&self) -> &str {
        &self.cover_ref
    }
}

/// An ordered, non-empty, immutable list of tracks.
///
/// The only constructor rejects an empty list, so every `Playlist` value has
/// at least one track and index arithmetic over it never divides by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, failing with `EmptyPlaylist` when `tracks` is empty.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    /// Number of tracks; always at least 1.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Check that `index` addresses a track, returning `OutOfRange` otherwise.
    pub fn check_index(&self, index: usize) -> Result<usize> {
        if index < self.tracks.len() {
            Ok(index)
        } else {
            Err(PlayerError::OutOfRange {
                index,
                len: self.tracks.len(),
            })
        }
    }
}

impl Index<usize> for Playlist {
    type Output = Track;

    fn index(&self, index: usize) -> &Track {
        &self.tracks[index]
    }
}
