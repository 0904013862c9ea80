use std::path::PathBuf;

use serde::Deserialize;

use crate::library::Track;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/aria/config.toml` or `~/.config/aria/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ARIA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub visualizer: VisualizerSettings,
    pub ui: UiSettings,
    pub playlist: PlaylistSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Whether the bar animation runs at all.
    pub enabled: bool,
    /// Number of bars; fixed for the whole session.
    pub bars: usize,
    /// Regeneration period in milliseconds.
    pub interval_ms: u64,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            bars: 20,
            interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which track fields to show in the now-playing box, and in what order.
    ///
    /// Example: ["artist", "title"]
    pub now_playing_fields: Vec<TrackDisplayField>,
    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,

    /// Which track fields to show per row in the playlist panel.
    pub panel_fields: Vec<TrackDisplayField>,
    /// Separator used to join `panel_fields`.
    pub panel_separator: String,
    /// Width of the playlist panel in columns.
    pub panel_width: u16,

    /// Fill of the position bar, in percent. Purely cosmetic.
    pub position_percent: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " My Player ".to_string(),
            now_playing_fields: vec![TrackDisplayField::Title],
            now_playing_separator: " - ".to_string(),
            panel_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            panel_separator: " · ".to_string(),
            panel_width: 32,
            position_percent: 30,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    #[serde(alias = "cover_ref", alias = "cover-ref")]
    Cover,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Optional TOML playlist file with `[[tracks]]` entries. Takes precedence over `tracks`.
    pub file: Option<PathBuf>,
    /// Inline track list.
    pub tracks: Vec<Track>,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            file: None,
            tracks: default_tracks(),
        }
    }
}

fn default_tracks() -> Vec<Track> {
    (1..=5)
        .map(|n| {
            Track::new(
                format!("Song {n}"),
                format!("Artist {n}"),
                "/placeholder.svg?height=300&width=300",
            )
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file path. Defaults to `$XDG_STATE_HOME/aria/aria.log`.
    pub file: Option<PathBuf>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
