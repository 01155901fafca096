//! Capture scanning and disc flipping.
//!
//! A move captures along each of the eight directions independently: walking
//! outward from the candidate square, a run of opponent discs is captured
//! only if it is closed by a disc of the moving color. The runs confirmed in
//! every direction are combined before anything on the board changes.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::cell::{Cell, Color};
use crate::constants::MAX_RUN;
use crate::direction::Direction;
use crate::square::Square;

/// Opponent discs captured along one direction, ordered outward from the move.
pub type Run = ArrayVec<Square, MAX_RUN>;

/// Scans a single direction from `sq` for `color`.
///
/// # Returns
///
/// The confirmed run of opponent discs, or `None` if this direction captures
/// nothing: the first neighbour is not an opponent disc, or the run reaches the
/// edge or an empty square before a disc of `color`.
pub fn scan_direction(board: &Board, sq: Square, color: Color, dir: Direction) -> Option<Run> {
    let own = Cell::from(color);
    let opponent = Cell::from(color.opponent());

    let mut run = Run::new();
    let mut cursor = sq.offset(dir)?;
    loop {
        let cell = board.cell(cursor);
        if cell == opponent {
            run.push(cursor);
            cursor = cursor.offset(dir)?;
        } else if cell == own && !run.is_empty() {
            return Some(run);
        } else {
            return None;
        }
    }
}

/// Confirmed captures of a candidate move, grouped by direction.
///
/// Empty when the move is illegal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureResult {
    runs: ArrayVec<(Direction, Run), 8>,
}

impl CaptureResult {
    /// Returns `true` if at least one direction confirmed a capture.
    #[inline]
    pub fn is_legal(&self) -> bool {
        !self.runs.is_empty()
    }

    /// Iterates over the confirmed runs, one per capturing direction.
    pub fn runs(&self) -> impl Iterator<Item = (Direction, &[Square])> {
        self.runs.iter().map(|(dir, run)| (*dir, run.as_slice()))
    }

    /// Iterates over every disc that flips, across all directions.
    pub fn flipped(&self) -> impl Iterator<Item = Square> + '_ {
        self.runs.iter().flat_map(|(_, run)| run.iter().copied())
    }

    /// Number of discs that flip.
    pub fn flip_count(&self) -> usize {
        self.runs.iter().map(|(_, run)| run.len()).sum()
    }
}

/// Evaluates a candidate move without touching the board.
///
/// An occupied target yields an empty result.
pub fn probe(board: &Board, sq: Square, color: Color) -> CaptureResult {
    let mut result = CaptureResult::default();
    if !board.cell(sq).is_empty() {
        return result;
    }
    for dir in Direction::ALL {
        if let Some(run) = scan_direction(board, sq, color, dir) {
            result.runs.push((dir, run));
        }
    }
    result
}

/// Checks legality without collecting the runs.
pub fn is_legal(board: &Board, sq: Square, color: Color) -> bool {
    board.cell(sq).is_empty()
        && Direction::ALL
            .into_iter()
            .any(|dir| scan_direction(board, sq, color, dir).is_some())
}

/// Places a disc of `color` on `sq` and flips every captured disc.
///
/// `captures` must come from [`probe`] on the same board, square and color.
pub(crate) fn apply(board: &mut Board, sq: Square, color: Color, captures: &CaptureResult) {
    debug_assert!(board.cell(sq).is_empty(), "apply on occupied square {sq}");
    debug_assert!(captures.is_legal(), "apply without captures at {sq}");

    let cell = Cell::from(color);
    board.set(sq, cell);
    for flipped in captures.flipped() {
        board.set(flipped, cell);
    }
}
