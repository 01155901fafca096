//! Rule engine for Reversi.
//!
//! The engine is a pure in-memory state machine: [`game_state::GameState`]
//! owns the history of board snapshots, [`capture`] decides legality and
//! flips, and nothing here draws or reads input.

pub mod board;
pub mod capture;
pub mod cell;
pub mod constants;
pub mod direction;
pub mod error;
pub mod game_state;
pub mod history;
pub mod move_list;
pub mod perft;
pub mod square;
