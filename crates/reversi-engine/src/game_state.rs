//! Game state management for Reversi.
//!
//! This module provides the `GameState` struct which owns the move history and
//! drives the turn state machine: applying moves, forcing a pass when the next
//! player has no legal move, and detecting the end of the game.

use std::cmp::Ordering;

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::cell::Color;
use crate::error::GameError;
use crate::history::{History, HistoryEntry};
use crate::move_list::MoveList;
use crate::square::Square;

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Winner(Color),
    Draw,
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Waiting for a move by the given color.
    InProgress(Color),
    /// Neither side can move.
    GameOver(GameResult),
}

impl Status {
    /// Returns the color to move, or `None` once the game is over.
    pub fn side_to_move(self) -> Option<Color> {
        match self {
            Status::InProgress(color) => Some(color),
            Status::GameOver(_) => None,
        }
    }

    pub fn is_game_over(self) -> bool {
        matches!(self, Status::GameOver(_))
    }
}

/// Disc counts for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub dark: u32,
    pub light: u32,
}

impl Score {
    /// Counts the discs on `board`.
    pub fn of(board: &Board) -> Self {
        Self {
            dark: board.count(Color::Dark),
            light: board.count(Color::Light),
        }
    }

    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Dark => self.dark,
            Color::Light => self.light,
        }
    }

    pub fn total(&self) -> u32 {
        self.dark + self.light
    }

    /// The color with more discs, or a draw on equal counts.
    pub fn leader(&self) -> GameResult {
        match self.dark.cmp(&self.light) {
            Ordering::Greater => GameResult::Winner(Color::Dark),
            Ordering::Less => GameResult::Winner(Color::Light),
            Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Everything a caller needs to know about an applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The square the disc was placed on.
    pub square: Square,
    /// The color that moved.
    pub color: Color,
    /// Discs flipped, across all capturing directions.
    pub flipped: Vec<Square>,
    /// The color that had to pass after this move, if any.
    pub pass: Option<Color>,
    /// Status after the move.
    pub status: Status,
}

/// Represents the state of a Reversi game.
///
/// The board, the side to move and the status are read from the latest history
/// snapshot, so undo and reset restore all of them together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    history: History,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the opening position with Dark to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Dark)
    }

    /// Creates a game from an arbitrary position.
    ///
    /// The turn is resolved immediately: if `side_to_move` cannot move the
    /// other color takes over (recorded as a pass on the initial entry), and
    /// if neither can move the game starts out finished.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let (status, pass) = resolve_turn(&board, side_to_move);
        Self {
            history: History::new(HistoryEntry::initial(board, status, pass)),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    pub fn status(&self) -> Status {
        self.history.current().status()
    }

    /// Returns which color moves next, or `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Color> {
        self.status().side_to_move()
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_game_over()
    }

    /// Returns the disc count for both colors, computed from the board.
    pub fn score(&self) -> Score {
        Score::of(self.board())
    }

    /// Returns the legal moves of the side to move, in square order.
    pub fn legal_moves(&self) -> Vec<Square> {
        self.move_list().squares().collect()
    }

    /// Returns the legal moves with their captures.
    ///
    /// Empty once the game is over.
    pub fn move_list(&self) -> MoveList {
        match self.side_to_move() {
            Some(color) => MoveList::new(self.board(), color),
            None => MoveList::default(),
        }
    }

    /// Places a disc for the side to move at the given column and row.
    ///
    /// # Errors
    ///
    /// `GameError::OutOfBounds` for coordinates outside the board, otherwise
    /// the errors of [`GameState::make_move`].
    pub fn make_move_at(&mut self, col: usize, row: usize) -> Result<MoveOutcome, GameError> {
        let sq = Square::from_col_row(col, row)?;
        self.make_move(sq)
    }

    /// Executes a move and updates the game state.
    ///
    /// After the discs are flipped the opponent gets the turn; if it has no
    /// legal move it passes back, and if neither side can move the game ends.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the state unchanged if the game is over,
    /// the square is occupied, or the move would flip nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn make_move(&mut self, sq: Square) -> Result<MoveOutcome, GameError> {
        let color = self.side_to_move().ok_or(GameError::GameOver)?;
        let board = self.board();
        if !board.cell(sq).is_empty() {
            return Err(GameError::Occupied(sq));
        }

        let (next, captures) = board
            .try_make_move(sq, color)
            .ok_or(GameError::NoCapture(sq))?;
        let flipped: Vec<Square> = captures.flipped().collect();
        let (status, pass) = resolve_turn(&next, color.opponent());

        debug!(%color, flipped = flipped.len(), "move applied");
        if let Some(skipped) = pass {
            info!(%skipped, "no legal move, turn passes back");
        }
        if let Status::GameOver(result) = status {
            let score = Score::of(&next);
            info!(?result, dark = score.dark, light = score.light, "game over");
        }

        self.history.record(HistoryEntry::after_move(
            next,
            status,
            sq,
            flipped.clone(),
            pass,
        ));

        Ok(MoveOutcome {
            square: sq,
            color,
            flipped,
            pass,
            status,
        })
    }

    /// Undoes the last move, restoring the board and the side to move.
    ///
    /// # Errors
    ///
    /// `GameError::NothingToUndo` if no move has been played.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let current = self.history.undo()?;
        debug!(last_move = ?current.last_move(), "move undone");
        Ok(())
    }

    /// Discards every move and returns to the initial position.
    ///
    /// # Errors
    ///
    /// `GameError::NothingToReset` if no move has been played.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.history.reset()?;
        debug!("game reset");
        Ok(())
    }

    /// Returns the last move played, if any.
    pub fn last_move(&self) -> Option<Square> {
        self.history.current().last_move()
    }

    /// Returns the color that had to pass after the latest move, if any.
    pub fn last_pass(&self) -> Option<Color> {
        self.history.current().pass()
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.move_count()
    }

    /// Whether undo and reset have anything to do.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
}

/// Decides who moves next on `board` when `next` is due.
///
/// # Returns
///
/// The new status and, if `next` had no legal move but its opponent did, the
/// color that was skipped.
fn resolve_turn(board: &Board, next: Color) -> (Status, Option<Color>) {
    if board.has_legal_moves(next) {
        return (Status::InProgress(next), None);
    }
    let other = next.opponent();
    if board.has_legal_moves(other) {
        return (Status::InProgress(other), Some(next));
    }
    (Status::GameOver(Score::of(board).leader()), None)
}
