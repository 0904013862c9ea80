//! Key bindings: translate a key press into an `Action`.
//!
//! The panel's list keys are only bound while the panel is visible; transport
//! keys work in both modes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Action;
use crate::transport::Direction;

use super::event_loop::EventLoopState;

pub fn action_for_key(
    key: KeyEvent,
    panel_visible: bool,
    state: &mut EventLoopState,
) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        state.pending_gg = false;
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    // `gg` is a two-key sequence; any other key cancels the prefix.
    if panel_visible && key.code == KeyCode::Char('g') {
        if state.pending_gg {
            state.pending_gg = false;
            return Some(Action::CursorFirst);
        }
        state.pending_gg = true;
        return None;
    }
    state.pending_gg = false;

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::TogglePlayPause,
        KeyCode::Char('h') | KeyCode::Left => Action::Advance(Direction::Previous),
        KeyCode::Char('l') | KeyCode::Right => Action::Advance(Direction::Next),
        KeyCode::Char('t') | KeyCode::Tab => Action::TogglePanel,
        KeyCode::Esc if panel_visible => Action::ClosePanel,
        KeyCode::Char('j') | KeyCode::Down if panel_visible => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up if panel_visible => Action::CursorUp,
        KeyCode::Char('G') if panel_visible => Action::CursorLast,
        KeyCode::Enter if panel_visible => Action::PickCursor,
        // Direct pick by row number, 1-based as shown in the panel.
        KeyCode::Char(c @ '1'..='9') if panel_visible => {
            Action::Pick(c as usize - '1' as usize)
        }
        _ => return None,
    };
    Some(action)
}
