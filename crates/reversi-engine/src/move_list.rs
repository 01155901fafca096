//! Legal move enumeration.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::capture::{self, CaptureResult};
use crate::cell::Color;
use crate::constants::BOARD_SQUARES;
use crate::square::Square;

/// A legal move together with the discs it captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Confirmed captures, per direction.
    pub captures: CaptureResult,
}

/// All legal moves of one color on a board, in square order.
#[derive(Debug, Clone, Default)]
pub struct MoveList {
    moves: ArrayVec<Move, BOARD_SQUARES>,
}

impl MoveList {
    /// Probes every square of `board` for `color` without mutating it.
    pub fn new(board: &Board, color: Color) -> MoveList {
        let mut moves = ArrayVec::new();
        for sq in Square::iter() {
            let captures = capture::probe(board, sq, color);
            if captures.is_legal() {
                moves.push(Move { sq, captures });
            }
        }
        MoveList { moves }
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Returns the target squares only.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(|m| m.sq)
    }

    /// Looks up the move placing a disc on `sq`.
    pub fn get(&self, sq: Square) -> Option<&Move> {
        self.moves.iter().find(|m| m.sq == sq)
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Square::*;

    #[test]
    fn test_opening_moves() {
        let board = Board::new();
        let dark = MoveList::new(&board, Color::Dark);
        assert_eq!(dark.squares().collect::<Vec<_>>(), vec![D3, C4, F5, E6]);

        let light = MoveList::new(&board, Color::Light);
        assert_eq!(light.squares().collect::<Vec<_>>(), vec![E3, F4, C5, D6]);
    }

    #[test]
    fn test_each_opening_move_flips_one() {
        let board = Board::new();
        let moves = MoveList::new(&board, Color::Dark);
        for m in moves.iter() {
            assert_eq!(m.captures.flip_count(), 1, "{}", m.sq);
        }
        let flipped: Vec<_> = moves.get(F5).unwrap().captures.flipped().collect();
        assert_eq!(flipped, vec![E5]);
    }

    #[test]
    fn test_contains() {
        let moves = MoveList::new(&Board::new(), Color::Dark);
        assert!(moves.contains(D3));
        assert!(!moves.contains(A1));
        assert!(!moves.contains(D4));
        assert_eq!(moves.count(), 4);
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let moves = MoveList::new(&Board::empty(), Color::Dark);
        assert!(moves.is_empty());
        assert_eq!(moves.count(), 0);
    }
}
