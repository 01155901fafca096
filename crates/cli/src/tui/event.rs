//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Application events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Select/confirm action (Enter or Space)
    Select,
    /// Left click at a terminal position. The renderer maps it to a cell.
    Click { column: u16, row: u16 },
    /// Undo last move
    Undo,
    /// Start a new game
    NewGame,
    ToggleScore,
    ToggleHints,
    ToggleLastMove,
    /// Character input (for dialogs)
    Char(char),
}

/// Polls for an event with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            // Check for Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                return Ok(Some(Event::ForceQuit));
            }
            Ok(map_key_event(key.code))
        }
        CrosstermEvent::Mouse(mouse) => Ok(map_mouse_event(mouse)),
        _ => Ok(None),
    }
}

/// Maps a key code to an application event.
fn map_key_event(code: KeyCode) -> Option<Event> {
    let event = match code {
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,

        // Cursor movement - Arrow keys
        KeyCode::Up => Event::CursorUp,
        KeyCode::Down => Event::CursorDown,
        KeyCode::Left => Event::CursorLeft,
        KeyCode::Right => Event::CursorRight,

        // Cursor movement - Vim style
        KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Char('h') => Event::CursorLeft,
        KeyCode::Char('l') => Event::CursorRight,

        KeyCode::Enter | KeyCode::Char(' ') => Event::Select,

        // Game commands
        KeyCode::Char('u') => Event::Undo,
        KeyCode::Char('n') | KeyCode::Char('r') => Event::NewGame,

        // View toggles
        KeyCode::Char('s') => Event::ToggleScore,
        KeyCode::Char('i') => Event::ToggleHints,
        KeyCode::Char('t') => Event::ToggleLastMove,

        KeyCode::Char(c) => Event::Char(c),
        _ => return None,
    };
    Some(event)
}

fn map_mouse_event(mouse: event::MouseEvent) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}
