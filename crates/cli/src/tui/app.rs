//! Application state and main loop for the TUI.

use std::time::Duration;

use ratatui::DefaultTerminal;
use reversi_engine::cell::Color;
use reversi_engine::constants::BOARD_SIZE;
use reversi_engine::game_state::{GameResult, GameState, MoveOutcome, Status};
use tracing::debug;

use crate::config::{ViewConfig, ViewToggle};

use super::event::{self, Event};
use super::render;
use super::widgets::BoardArea;

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// The given color had no legal move and passed
    PassNotice(Color),
    /// The game just ended
    GameOver(GameResult),
    /// Confirming a reset that would discard moves
    ConfirmReset,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game state
    pub game: GameState,
    /// What the renderer shows besides the discs
    pub view: ViewConfig,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Cursor position on the board (0-7 for both row and col)
    pub cursor: (usize, usize),
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Cell geometry from the last frame, for mouse clicks
    board_area: Option<BoardArea>,
}

impl App {
    /// Creates a new App instance.
    pub fn new(view: ViewConfig) -> Self {
        Self {
            game: GameState::new(),
            view,
            ui_mode: UiMode::Normal,
            cursor: (3, 3), // Start at center
            should_quit: false,
            status_message: None,
            board_area: None,
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

        loop {
            let mut board_area = None;
            terminal.draw(|frame| board_area = render::render(frame, &self))?;
            self.board_area = board_area;

            if let Some(event) = event::poll_event(Duration::from_millis(100))? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;

        Ok(())
    }

    /// Whether undo and reset are available.
    pub fn can_undo(&self) -> bool {
        self.game.can_undo()
    }

    /// Handles an input event.
    pub fn handle_event(&mut self, event: Event) {
        if event == Event::ForceQuit {
            self.should_quit = true;
            return;
        }
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::PassNotice(_) | UiMode::GameOver(_) => self.handle_notice_event(event),
            UiMode::ConfirmReset => self.handle_confirm_reset_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal game mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            Event::CursorDown => {
                if self.cursor.0 < BOARD_SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            Event::CursorLeft => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            Event::CursorRight => {
                if self.cursor.1 < BOARD_SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            Event::Select => {
                self.try_make_move_at_cursor();
            }
            Event::Click { column, row } => {
                if let Some(cell) = self.board_area.and_then(|area| area.cell_at(column, row)) {
                    self.cursor = cell;
                    self.try_make_move_at_cursor();
                }
            }
            Event::Undo => {
                self.undo_move();
            }
            Event::NewGame => {
                if self.can_undo() {
                    self.ui_mode = UiMode::ConfirmReset;
                } else {
                    self.status_message = Some("Nothing to reset".to_string());
                }
            }
            Event::ToggleScore => self.toggle(ViewToggle::Score),
            Event::ToggleHints => self.toggle(ViewToggle::LegalMoves),
            Event::ToggleLastMove => self.toggle(ViewToggle::LastMove),
            _ => {}
        }
    }

    /// Handles events while a pass or game-over popup is shown.
    fn handle_notice_event(&mut self, event: Event) {
        match event {
            Event::Select | Event::Quit | Event::Char(_) | Event::Click { .. } => {
                self.ui_mode = UiMode::Normal;
            }
            Event::NewGame => {
                self.ui_mode = UiMode::Normal;
                self.handle_normal_event(Event::NewGame);
            }
            _ => {}
        }
    }

    /// Handles events in reset confirmation mode.
    fn handle_confirm_reset_event(&mut self, event: Event) {
        match event {
            Event::Char('y') | Event::Char('Y') | Event::Select => {
                self.ui_mode = UiMode::Normal;
                self.reset_game();
            }
            Event::Char('n') | Event::Char('N') | Event::NewGame | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            Event::Char('n') | Event::Char('N') | Event::NewGame | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Tries to make a move at the current cursor position.
    fn try_make_move_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        match self.game.make_move_at(col, row) {
            Ok(outcome) => self.after_move(&outcome),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn after_move(&mut self, outcome: &MoveOutcome) {
        self.status_message = None;
        self.ui_mode = match (outcome.status, outcome.pass) {
            (Status::GameOver(result), _) => UiMode::GameOver(result),
            (Status::InProgress(_), Some(passed)) => UiMode::PassNotice(passed),
            (Status::InProgress(_), None) => UiMode::Normal,
        };
    }

    /// Undoes the last move.
    fn undo_move(&mut self) {
        match self.game.undo() {
            Ok(()) => self.status_message = Some("Move undone".to_string()),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Discards every move and starts over.
    fn reset_game(&mut self) {
        match self.game.reset() {
            Ok(()) => {
                self.cursor = (3, 3);
                self.status_message = Some("New game started".to_string());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn toggle(&mut self, toggle: ViewToggle) {
        let shown = self.view.toggle(toggle);
        debug!(%toggle, shown, "view toggled");
        let state = if shown { "shown" } else { "hidden" };
        self.status_message = Some(format!("{toggle} {state}"));
    }

    #[cfg(test)]
    fn set_board_area(&mut self, area: BoardArea) {
        self.board_area = Some(area);
    }
}
