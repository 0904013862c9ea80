use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::ui;

use super::keymap::action_for_key;

/// How long to wait for input before redrawing. Shorter than the default
/// visualizer period so every sample gets drawn.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Message from the last rejected action, shown until the next action.
    pub notice: Option<String>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main terminal event loop: draws the UI, applies key presses to `app` and
/// follows terminal focus to start/stop the visualizer. Returns `Ok(())` when
/// the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui, state.notice.as_deref()))?;

        if app.should_quit {
            log::info!("quit requested");
            return Ok(());
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = action_for_key(key, app.panel_visible(), state) else {
                    continue;
                };
                state.notice = None;
                if let Err(e) = app.apply(action) {
                    log::warn!("{action:?} rejected: {e}");
                    state.notice = Some(e.to_string());
                }
            }
            Event::FocusLost => {
                app.deactivate_view();
            }
            Event::FocusGained => {
                app.activate_view();
            }
            _ => {}
        }
    }
}
