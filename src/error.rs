//! Error types shared by the player core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the playlist store and the transport controller.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A track index outside `[0, len)` was requested. Nothing was mutated.
    #[error("track index {index} is out of range for a playlist of {len} tracks")]
    OutOfRange { index: usize, len: usize },

    /// A playlist was built from zero tracks.
    #[error("playlist is empty: at least one track is required")]
    EmptyPlaylist,

    /// The playlist file could not be read.
    #[error("failed to read playlist file {path:?}: {source}")]
    PlaylistFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The playlist file is not valid TOML or does not match the expected layout.
    #[error("failed to parse playlist file {path:?}: {source}")]
    PlaylistParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlayerError>;
