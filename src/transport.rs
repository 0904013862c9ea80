//! Transport module: current-track navigation and the play/pause toggle.

mod controller;

pub use controller::*;

#[cfg(test)]
mod tests;
