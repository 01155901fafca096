//! Error types for the rule engine.

use crate::square::Square;

/// Errors returned by engine operations.
///
/// None of these are fatal: a failed call leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The target square already holds a disc.
    #[error("illegal move {0}: square is occupied")]
    Occupied(Square),
    /// The target square is empty but no direction captures anything.
    #[error("illegal move {0}: no discs would be flipped")]
    NoCapture(Square),
    /// A move was submitted after the game ended.
    #[error("illegal move: the game is over")]
    GameOver,
    /// Coordinates outside the board.
    #[error("coordinates ({col}, {row}) are outside the board")]
    OutOfBounds { col: usize, row: usize },
    /// Undo requested with only the initial position recorded.
    #[error("nothing to undo")]
    NothingToUndo,
    /// Reset requested with only the initial position recorded.
    #[error("nothing to reset")]
    NothingToReset,
}

impl GameError {
    /// Returns `true` for every variant that rejects a submitted move.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::Occupied(_) | GameError::NoCapture(_) | GameError::GameOver
        )
    }
}

/// Errors from parsing a 64-character board string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardStringError {
    #[error("board string must have 64 cells, got {0}")]
    InvalidLength(usize),
    #[error("invalid character '{ch}' at cell {index}")]
    InvalidChar { index: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::Occupied(Square::D4).to_string(),
            "illegal move d4: square is occupied"
        );
        assert_eq!(
            GameError::OutOfBounds { col: 9, row: 2 }.to_string(),
            "coordinates (9, 2) are outside the board"
        );
        assert_eq!(GameError::NothingToUndo.to_string(), "nothing to undo");
    }

    #[test]
    fn test_is_illegal_move() {
        assert!(GameError::Occupied(Square::A1).is_illegal_move());
        assert!(GameError::NoCapture(Square::A1).is_illegal_move());
        assert!(GameError::GameOver.is_illegal_move());
        assert!(!GameError::NothingToReset.is_illegal_move());
        assert!(!GameError::OutOfBounds { col: 8, row: 8 }.is_illegal_move());
    }
}
