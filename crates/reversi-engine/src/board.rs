//! Reversi board representation as a grid of cells.

use std::fmt;

use crate::capture::{self, CaptureResult};
use crate::cell::{Cell, Color};
use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::error::{BoardStringError, GameError};
use crate::square::Square;

/// An 8×8 grid of cells.
///
/// The board carries no notion of whose turn it is; that lives in
/// [`GameState`](crate::game_state::GameState). Cells are stored row-major in
/// square index order (A1, B1, ..., H8).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SQUARES],
}

impl Default for Board {
    /// Creates a board with the standard opening position.
    ///
    /// - Light discs on D4 and E5
    /// - Dark discs on E4 and D5
    fn default() -> Self {
        let mut board = Board::empty();
        board.set(Square::D4, Cell::Light);
        board.set(Square::E5, Cell::Light);
        board.set(Square::E4, Cell::Dark);
        board.set(Square::D5, Cell::Dark);
        board
    }
}

impl Board {
    /// Creates a new `Board` with the opening position.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with every cell empty.
    pub fn empty() -> Board {
        Board {
            cells: [Cell::Empty; BOARD_SQUARES],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds 64 cells from A1 to H8: `X` for dark, `O` for light and
    /// `-` for empty (see [`Cell::from_char`] for accepted aliases). Whitespace
    /// is ignored so boards can be written one row per line.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown characters or a cell count other than 64.
    pub fn from_string(board_string: &str) -> Result<Board, BoardStringError> {
        let mut board = Board::empty();
        let mut count = 0;
        for ch in board_string.chars().filter(|c| !c.is_whitespace()) {
            let Some(cell) = Cell::from_char(ch) else {
                return Err(BoardStringError::InvalidChar { index: count, ch });
            };
            if let Some(sq) = Square::from_index(count) {
                board.set(sq, cell);
            }
            count += 1;
        }
        if count != BOARD_SQUARES {
            return Err(BoardStringError::InvalidLength(count));
        }
        Ok(board)
    }

    /// Returns the 64-character string representation accepted by
    /// [`Board::from_string`].
    pub fn to_board_string(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Reads the cell at the given column and row.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` if either coordinate is outside `0..8`.
    pub fn get(&self, col: usize, row: usize) -> Result<Cell, GameError> {
        Square::from_col_row(col, row).map(|sq| self.cell(sq))
    }

    /// Reads the cell at a square.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    /// Returns the number of discs of the given color.
    pub fn count(&self, color: Color) -> u32 {
        let target = Cell::from(color);
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    /// Returns the number of discs of either color.
    pub fn disc_count(&self) -> u32 {
        self.cells.iter().filter(|c| !c.is_empty()).count() as u32
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u32 {
        BOARD_SQUARES as u32 - self.disc_count()
    }

    /// Checks whether `color` has at least one legal move.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        Square::iter().any(|sq| capture::is_legal(self, sq, color))
    }

    /// Checks whether neither side can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Color::Dark) && !self.has_legal_moves(Color::Light)
    }

    /// Attempts a move for `color` without touching `self`.
    ///
    /// # Returns
    /// The resulting board together with the confirmed captures, or `None` if
    /// the move is illegal.
    pub fn try_make_move(&self, sq: Square, color: Color) -> Option<(Board, CaptureResult)> {
        let captures = capture::probe(self, sq, color);
        if !captures.is_legal() {
            return None;
        }
        let mut next = *self;
        capture::apply(&mut next, sq, color, &captures);
        Some((next, captures))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_board_string())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let cell = self.cells[row * BOARD_SIZE + col];
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_position() {
        let board = Board::new();
        assert_eq!(board.cell(Square::D4), Cell::Light);
        assert_eq!(board.cell(Square::E5), Cell::Light);
        assert_eq!(board.cell(Square::E4), Cell::Dark);
        assert_eq!(board.cell(Square::D5), Cell::Dark);
        assert_eq!(board.count(Color::Dark), 2);
        assert_eq!(board.count(Color::Light), 2);
        assert_eq!(board.disc_count(), 4);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_get_by_coordinates() {
        let board = Board::new();
        assert_eq!(board.get(3, 3), Ok(Cell::Light));
        assert_eq!(board.get(4, 3), Ok(Cell::Dark));
        assert_eq!(board.get(0, 0), Ok(Cell::Empty));
        assert_eq!(
            board.get(8, 0),
            Err(GameError::OutOfBounds { col: 8, row: 0 })
        );
        assert_eq!(
            board.get(0, 8),
            Err(GameError::OutOfBounds { col: 0, row: 8 })
        );
    }

    #[test]
    fn test_board_string_roundtrip() {
        let board = Board::new();
        let s = board.to_board_string();
        assert_eq!(s.len(), 64);
        assert_eq!(
            s,
            "---------------------------OX------XO---------------------------"
        );
        assert_eq!(Board::from_string(&s), Ok(board));
    }

    #[test]
    fn test_from_string_multiline() {
        let board = Board::from_string(
            "X-------
             --------
             --------
             --------
             --------
             --------
             --------
             -------O",
        )
        .unwrap();
        assert_eq!(board.cell(Square::A1), Cell::Dark);
        assert_eq!(board.cell(Square::H8), Cell::Light);
        assert_eq!(board.disc_count(), 2);
    }

    #[test]
    fn test_from_string_errors() {
        assert_eq!(
            Board::from_string("XO"),
            Err(BoardStringError::InvalidLength(2))
        );
        assert_eq!(
            Board::from_string(&"-".repeat(65)),
            Err(BoardStringError::InvalidLength(65))
        );
        assert_eq!(
            Board::from_string("--Z"),
            Err(BoardStringError::InvalidChar { index: 2, ch: 'Z' })
        );
    }

    #[test]
    fn test_try_make_move_leaves_original() {
        let board = Board::new();
        let (next, captures) = board.try_make_move(Square::D3, Color::Dark).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(captures.flipped().collect::<Vec<_>>(), vec![Square::D4]);
        assert_eq!(next.cell(Square::D3), Cell::Dark);
        assert_eq!(next.cell(Square::D4), Cell::Dark);
        assert!(board.try_make_move(Square::A1, Color::Dark).is_none());
        assert!(board.try_make_move(Square::D4, Color::Dark).is_none());
    }

    #[test]
    fn test_is_game_over() {
        assert!(!Board::new().is_game_over());
        assert!(Board::empty().is_game_over());
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "4 - - - O X - - -");
        assert_eq!(lines[5], "5 - - - X O - - -");
    }
}
