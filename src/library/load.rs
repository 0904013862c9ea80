use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlayerError, Result};

use super::model::{Playlist, Track};

/// On-disk playlist layout: a list of `[[tracks]]` tables.
#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Parse a playlist from TOML text. `origin` is only used in error messages.
pub fn parse_playlist(text: &str, origin: &Path) -> Result<Playlist> {
    let file: PlaylistFile = toml::from_str(text).map_err(|source| PlayerError::PlaylistParse {
        path: origin.to_path_buf(),
        source,
    })?;
    Playlist::new(file.tracks)
}

/// Read and parse a playlist file.
pub fn load_playlist_file(path: &Path) -> Result<Playlist> {
    let text = fs::read_to_string(path).map_err(|source| PlayerError::PlaylistFile {
        path: path.to_path_buf(),
        source,
    })?;
    let playlist = parse_playlist(&text, path)?;
    log::info!(
        "loaded {} tracks from playlist file {}",
        playlist.len(),
        path.display()
    );
    Ok(playlist)
}
