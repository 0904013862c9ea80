//! Selection panel: the playlist side panel's open/closed state, its list
//! cursor, and the pick operation that hands a chosen index to the transport.

use crate::error::Result;
use crate::transport::TransportController;

#[derive(Debug, Clone, Default)]
pub struct SelectionPanel {
    visible: bool,
    cursor: usize,
}

impl SelectionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the highlighted list row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open the panel with the cursor on the transport's current track.
    pub fn open(&mut self, transport: &TransportController) {
        if !self.visible {
            self.cursor = transport.current_index();
            log::debug!("panel: open");
        }
        self.visible = true;
    }

    pub fn close(&mut self) {
        if self.visible {
            log::debug!("panel: close");
        }
        self.visible = false;
    }

    pub fn toggle(&mut self, transport: &TransportController) {
        if self.visible {
            self.close();
        } else {
            self.open(transport);
        }
    }

    /// Select `index` on the transport and close the panel.
    ///
    /// On `OutOfRange` neither the transport nor the panel changes, so the
    /// user can pick again.
    pub fn pick(&mut self, transport: &mut TransportController, index: usize) -> Result<()> {
        if let Err(e) = transport.select_index(index) {
            log::warn!("panel: pick rejected: {e}");
            return Err(e);
        }
        self.cursor = index;
        self.close();
        Ok(())
    }

    /// Pick the row under the cursor.
    pub fn pick_cursor(&mut self, transport: &mut TransportController) -> Result<()> {
        self.pick(transport, self.cursor)
    }

    /// Move the cursor down one row, wrapping to the top.
    pub fn cursor_down(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor up one row, wrapping to the bottom.
    pub fn cursor_up(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor.min(len - 1) + len - 1) % len;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }
}
