//! Non-interactive replay of a move record.

use reversi_engine::game_state::GameState;
use tracing::info;

use crate::config::ViewConfig;
use crate::game::{board_string, describe_score, describe_status};
use crate::parse::parse_move_string;

/// Plays a concatenated move record from the opening position.
///
/// # Errors
///
/// Returns a message naming the first move that cannot be parsed or played.
pub fn play_record(record: &str) -> Result<GameState, String> {
    let moves = parse_move_string(record)?;
    let mut game = GameState::new();
    for (i, &sq) in moves.iter().enumerate() {
        game.make_move(sq)
            .map_err(|e| format!("Move #{} ({sq}) rejected: {e}", i + 1))?;
    }
    Ok(game)
}

/// Replays `record` and prints the final position.
pub fn run(record: &str, view: ViewConfig) -> Result<(), String> {
    let game = play_record(record)?;
    let score = game.score();
    info!(
        moves = game.move_count(),
        dark = score.dark,
        light = score.light,
        "replay finished"
    );

    print!("{}", board_string(&game, &view));
    println!("{}", describe_score(&game, &view));
    println!("{}", describe_status(game.status()));
    Ok(())
}
