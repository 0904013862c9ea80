use crate::config::TrackDisplayField;

use super::model::Track;

/// Build a display string for a track according to the provided `fields` and separator.
///
/// Empty fields are skipped. Falls back to the title when nothing was produced.
pub fn display_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for f in fields {
        let value = match f {
            TrackDisplayField::Title => track.title(),
            TrackDisplayField::Artist => track.artist(),
            TrackDisplayField::Cover => track.cover_ref(),
        };
        let value = value.trim();
        if !value.is_empty() {
            parts.push(value);
        }
    }

    if parts.is_empty() {
        track.title().to_string()
    } else {
        parts.join(sep)
    }
}
