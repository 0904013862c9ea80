//! Playlist store: track records, the non-empty playlist and its loaders.
//!
//! Tracks come either from the inline `[playlist]` config section or from a
//! separate TOML playlist file. The store is read-only after startup.

mod display;
mod load;
mod model;

pub use display::display_from_fields;
pub use load::load_playlist_file;
pub use model::{Playlist, Track};

#[cfg(test)]
mod tests;
