use reversi_engine::board::Board;
use reversi_engine::cell::Color;
use reversi_engine::perft::{REFERENCE_COUNTS, perft, perft_root};

#[test]
fn test_perft() {
    for (depth, expected) in REFERENCE_COUNTS {
        assert_eq!(perft_root(depth), expected, "depth {depth}");
    }
}

#[test]
fn test_perft_depth_zero_is_single_leaf() {
    assert_eq!(perft_root(0), 1);
    assert_eq!(perft(&Board::empty(), Color::Dark, 0), 1);
}

#[test]
fn test_perft_finished_position_is_single_leaf() {
    assert_eq!(perft(&Board::empty(), Color::Dark, 3), 1);
}
