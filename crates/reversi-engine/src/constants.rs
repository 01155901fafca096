//! Global constants

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of discs on the board in the opening position.
pub const OPENING_DISCS: u32 = 4;

/// Longest stretch of opponent discs a scan can walk in one direction.
pub(crate) const MAX_RUN: usize = BOARD_SIZE - 1;
