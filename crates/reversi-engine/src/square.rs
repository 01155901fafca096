use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::direction::Direction;
use crate::error::GameError;

/// Represents a square on the board, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H from left to right and ranks (rows) 1-8
/// from top to bottom. The board is indexed as follows:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

use Square::*;

#[rustfmt::skip]
const ALL_SQUARES: [Square; BOARD_SQUARES] = [
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
];

impl Square {
    /// Converts the `Square` into its index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` if the index is in 0-63, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    /// Returns the column (file) of this square, 0 for A through 7 for H.
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the row (rank) of this square, 0 for rank 1 through 7 for rank 8.
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Creates a `Square` from column and row coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` if either coordinate is outside `0..8`.
    pub fn from_col_row(col: usize, row: usize) -> Result<Square, GameError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { col, row });
        }
        Ok(ALL_SQUARES[row * BOARD_SIZE + col])
    }

    /// Returns the neighbouring square one step in `dir`, or `None` past the edge.
    #[inline]
    pub fn offset(self, dir: Direction) -> Option<Square> {
        let (dc, dr) = dir.delta();
        let col = self.col().checked_add_signed(dc)?;
        let row = self.row().checked_add_signed(dr)?;
        Square::from_col_row(col, row).ok()
    }

    /// Returns an iterator over all 64 squares, from A1 to H8.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter()
    }
}

/// Error type for square notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` or `"D3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(ALL_SQUARES[row * BOARD_SIZE + col])
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'1' + self.row() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, sq) in Square::iter().enumerate() {
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_index(i), Some(sq));
        }
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_col_row() {
        assert_eq!((A1.col(), A1.row()), (0, 0));
        assert_eq!((H1.col(), H1.row()), (7, 0));
        assert_eq!((D4.col(), D4.row()), (3, 3));
        assert_eq!((E5.col(), E5.row()), (4, 4));
        assert_eq!((H8.col(), H8.row()), (7, 7));

        for sq in Square::iter() {
            assert_eq!(Square::from_col_row(sq.col(), sq.row()), Ok(sq));
        }
    }

    #[test]
    fn test_from_col_row_out_of_bounds() {
        assert_eq!(
            Square::from_col_row(8, 0),
            Err(GameError::OutOfBounds { col: 8, row: 0 })
        );
        assert_eq!(
            Square::from_col_row(0, 8),
            Err(GameError::OutOfBounds { col: 0, row: 8 })
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(D4.offset(Direction::North), Some(D3));
        assert_eq!(D4.offset(Direction::SouthEast), Some(E5));
        assert_eq!(D4.offset(Direction::West), Some(C4));
        assert_eq!(A1.offset(Direction::North), None);
        assert_eq!(A1.offset(Direction::West), None);
        assert_eq!(A1.offset(Direction::NorthEast), None);
        assert_eq!(H8.offset(Direction::East), None);
        assert_eq!(H8.offset(Direction::South), None);
        assert_eq!(H1.offset(Direction::SouthWest), Some(G2));
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>(), Ok(A1));
        assert_eq!("H8".parse::<Square>(), Ok(H8));
        assert_eq!(" d3 ".parse::<Square>(), Ok(D3));
        assert_eq!("".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("abc".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("z1".parse::<Square>(), Err(SquareError::InvalidFile('z')));
        assert_eq!("a0".parse::<Square>(), Err(SquareError::InvalidRank('0')));
        assert_eq!("a9".parse::<Square>(), Err(SquareError::InvalidRank('9')));
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(A1.to_string(), "a1");
        assert_eq!(E6.to_string(), "e6");
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
            assert_eq!(sq.to_string().to_uppercase().parse::<Square>(), Ok(sq));
        }
    }

    #[test]
    fn test_square_error_display() {
        assert_eq!(
            SquareError::InvalidFile('z').to_string(),
            "Invalid file 'z': must be a-h or A-H"
        );
        assert_eq!(
            SquareError::InvalidRank('9').to_string(),
            "Invalid rank '9': must be 1-8"
        );
    }
}
