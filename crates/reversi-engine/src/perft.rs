//! Move-generation node counting.

use crate::board::Board;
use crate::capture;
use crate::cell::Color;
use crate::move_list::MoveList;

/// Known leaf counts from the opening position, as `(depth, nodes)`.
pub const REFERENCE_COUNTS: [(u32, u64); 7] = [
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
    (7, 55_092),
];

/// Executes a perft run starting from the opening position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand. A depth of `0` counts the root
///   itself and `1` counts the immediate legal moves.
///
/// # Returns
///
/// The number of leaf nodes reached.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Color::Dark, depth)
}

/// Counts leaf nodes below `board` with `side` to move.
///
/// A pass does not consume depth, and a position where neither side can move
/// counts as a single leaf.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = MoveList::new(board, side);

    if move_list.is_empty() {
        if board.has_legal_moves(side.opponent()) {
            return perft(board, side.opponent(), depth);
        }
        return 1;
    }

    if depth == 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|m| {
            let mut next = *board;
            capture::apply(&mut next, m.sq, side, &m.captures);
            perft(&next, side.opponent(), depth - 1)
        })
        .sum()
}
