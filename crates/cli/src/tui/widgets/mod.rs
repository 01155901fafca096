mod board;

pub use board::{BoardArea, BoardWidget};
