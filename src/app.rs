//! Application module: exposes the session model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the transport, the
//! selection panel and the visualizer feed for one session.

mod model;

pub use model::*;
