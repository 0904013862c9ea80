use std::path::PathBuf;

use log::LevelFilter;

use crate::config;
use crate::error::Result;
use crate::library::{Playlist, load_playlist_file};
use crate::logging;

/// Build the session playlist. A file (from the command line or the config)
/// wins over the inline track list. An empty result is fatal.
pub fn build_playlist(
    settings: &config::PlaylistSettings,
    cli_file: Option<PathBuf>,
) -> Result<Playlist> {
    match cli_file.or_else(|| settings.file.clone()) {
        Some(path) => load_playlist_file(&path),
        None => Playlist::new(settings.tracks.clone()),
    }
}

/// Install the file logger. Logging is optional; failures are reported on
/// stderr before the UI takes over the terminal.
pub fn init_logging(settings: &config::Settings) {
    let Some(path) = settings.log_path() else {
        return;
    };
    let level = settings
        .logging
        .level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    if let Err(e) = logging::setup_logger(&path, level) {
        eprintln!("aria: failed to set up logging at {}: {e}", path.display());
    }
}
