//! Application model types: `App` and `Action`.
//!
//! `App` is the per-session state object. It owns the transport controller,
//! the selection panel and the visualizer feed; the renderer only reads it
//! and the input layer only talks to it through `Action`s.

use crate::config::VisualizerSettings;
use crate::error::Result;
use crate::library::{Playlist, Track};
use crate::panel::SelectionPanel;
use crate::transport::{Direction, PlaybackState, TransportController};
use crate::visualizer::{VisualizerFeed, VisualizerSample};

/// A discrete user event, applied to the session one at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePlayPause,
    Advance(Direction),
    TogglePanel,
    ClosePanel,
    /// Pick a playlist row by index; selects it and closes the panel.
    Pick(usize),
    /// Pick the row under the panel cursor.
    PickCursor,
    CursorDown,
    CursorUp,
    CursorFirst,
    CursorLast,
    Quit,
}

/// The main application model.
#[derive(Debug)]
pub struct App {
    transport: TransportController,
    panel: SelectionPanel,
    visualizer: VisualizerFeed,
    visualizer_enabled: bool,
    pub should_quit: bool,
}

impl App {
    /// Create a session paused on the first track with the panel closed and
    /// the visualizer stopped.
    pub fn new(playlist: Playlist, visualizer: &VisualizerSettings) -> Self {
        Self {
            transport: TransportController::new(playlist),
            panel: SelectionPanel::new(),
            visualizer: VisualizerFeed::from_settings(visualizer),
            visualizer_enabled: visualizer.enabled,
            should_quit: false,
        }
    }

    pub fn current_track(&self) -> &Track {
        self.transport.current_track()
    }

    pub fn current_index(&self) -> usize {
        self.transport.current_index()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.transport.state()
    }

    pub fn playlist(&self) -> &Playlist {
        self.transport.playlist()
    }

    pub fn playlist_len(&self) -> usize {
        self.transport.playlist_len()
    }

    pub fn panel_visible(&self) -> bool {
        self.panel.is_visible()
    }

    pub fn panel_cursor(&self) -> usize {
        self.panel.cursor()
    }

    pub fn visualizer_samples(&self) -> VisualizerSample {
        self.visualizer.samples()
    }

    pub fn visualizer(&self) -> &VisualizerFeed {
        &self.visualizer
    }

    pub fn toggle_play_pause(&mut self) -> bool {
        self.transport.toggle_play_pause()
    }

    pub fn advance(&mut self, direction: Direction) -> usize {
        self.transport.advance(direction)
    }

    /// Select `index` from the panel and close it; see `SelectionPanel::pick`.
    pub fn pick(&mut self, index: usize) -> Result<()> {
        self.panel.pick(&mut self.transport, index)
    }

    pub fn toggle_panel(&mut self) {
        self.panel.toggle(&self.transport);
    }

    pub fn close_panel(&mut self) {
        self.panel.close();
    }

    /// Apply one user event. Only picks can fail, and a failed pick changes nothing.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let len = self.transport.playlist_len();
        match action {
            Action::TogglePlayPause => {
                self.toggle_play_pause();
            }
            Action::Advance(direction) => {
                self.advance(direction);
            }
            Action::TogglePanel => self.toggle_panel(),
            Action::ClosePanel => self.close_panel(),
            Action::Pick(index) => self.pick(index)?,
            Action::PickCursor => self.panel.pick_cursor(&mut self.transport)?,
            Action::CursorDown => self.panel.cursor_down(len),
            Action::CursorUp => self.panel.cursor_up(len),
            Action::CursorFirst => self.panel.cursor_first(),
            Action::CursorLast => self.panel.cursor_last(len),
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// The view became active: start the visualizer if it is enabled.
    pub fn activate_view(&mut self) -> bool {
        self.visualizer_enabled && self.visualizer.start()
    }

    /// The view became inactive: stop the visualizer.
    pub fn deactivate_view(&mut self) -> bool {
        self.visualizer.stop()
    }
}
