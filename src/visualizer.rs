//! Visualizer feed: decorative bar amplitudes regenerated on a timer.
//!
//! The amplitudes are random and unrelated to any audio signal.

mod feed;
mod sample;

pub use feed::VisualizerFeed;
pub use sample::{AMPLITUDE_MAX, VisualizerSample};
