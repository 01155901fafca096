//! Text rendering of a game for the line-mode front-end.
//!
//! Everything here reads the game and the view settings; nothing mutates
//! either.

use colored::Colorize;
use reversi_engine::cell::{Cell, Color};
use reversi_engine::constants::BOARD_SIZE;
use reversi_engine::game_state::{GameResult, GameState, Status};
use reversi_engine::square::Square;

use crate::config::ViewConfig;

/// Returns the disc symbol used for a color.
pub fn symbol(color: Color) -> char {
    Cell::from(color).to_char()
}

/// One-line summary of the status: whose turn it is or how the game ended.
pub fn describe_status(status: Status) -> String {
    match status {
        Status::InProgress(color) => format!("{color}'s turn ({})", symbol(color)),
        Status::GameOver(result) => describe_result(result),
    }
}

pub fn describe_result(result: GameResult) -> String {
    match result {
        GameResult::Winner(color) => format!("{color} wins!"),
        GameResult::Draw => "Draw!".to_string(),
    }
}

/// Formats the score line, hiding the counts if the view asks for it.
pub fn describe_score(game: &GameState, view: &ViewConfig) -> String {
    let status = game.status();
    let score = game.score();
    format!(
        "Dark: {}  Light: {}",
        view.format_count(status, score.dark),
        view.format_count(status, score.light)
    )
}

/// Lines printed to the right of the board.
fn side_info(game: &GameState, view: &ViewConfig) -> Vec<String> {
    let status = game.status();
    let score = game.score();
    let mut lines = Vec::new();

    match status {
        Status::InProgress(_) => lines.push(describe_status(status)),
        Status::GameOver(_) => lines.push("*** Game Over ***".to_string()),
    }
    lines.push(format!("Dark:  {}", view.format_count(status, score.dark)));
    lines.push(format!("Light: {}", view.format_count(status, score.light)));
    if let Status::GameOver(result) = status {
        lines.push(describe_result(result));
    }
    if view.highlight_last_move
        && let Some(sq) = game.last_move()
    {
        lines.push(format!("Last:  {sq}"));
    }
    if let Some(passed) = game.last_pass()
        && !status.is_game_over()
    {
        lines.push(format!("{passed} passed"));
    }
    lines
}

/// Returns a plain text representation of the board.
///
/// Legal moves are drawn as `.` when the view shows them.
pub fn board_string(game: &GameState, view: &ViewConfig) -> String {
    let board = game.board();
    let legal = legal_squares(game, view);
    let info = side_info(game, view);

    let mut result = String::new();
    result.push_str("   a b c d e f g h\n");
    result.push_str("  +-+-+-+-+-+-+-+-+\n");

    for (y, rank) in ranks().enumerate() {
        result.push_str(&format!("{} |", y + 1));
        for &sq in &rank {
            let symbol = match board.cell(sq) {
                Cell::Empty if legal.contains(&sq) => '.',
                Cell::Empty => ' ',
                cell => cell.to_char(),
            };
            result.push(symbol);
            result.push('|');
        }
        if let Some(line) = info.get(y) {
            result.push(' ');
            result.push_str(line);
        }
        result.push('\n');
        result.push_str("  +-+-+-+-+-+-+-+-+\n");
    }
    result
}

/// Prints a colored representation of the board to the terminal.
pub fn print_board(game: &GameState, view: &ViewConfig) {
    let board = game.board();
    let legal = legal_squares(game, view);
    let last_move = game.last_move().filter(|_| view.highlight_last_move);
    let info = side_info(game, view);

    println!("      a   b   c   d   e   f   g   h");
    println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

    for (y, rank) in ranks().enumerate() {
        print!("  {} │", y + 1);
        for &sq in &rank {
            let is_last_move = Some(sq) == last_move;

            let symbol = match board.cell(sq) {
                Cell::Dark if is_last_move => " X ".on_bright_black().bright_green(),
                Cell::Light if is_last_move => " O ".on_bright_black().bright_yellow(),
                Cell::Dark => " X ".bright_green(),
                Cell::Light => " O ".bright_yellow(),
                Cell::Empty if legal.contains(&sq) => " · ".bright_cyan(),
                Cell::Empty => "   ".black(),
            };
            print!("{symbol}│");
        }

        match info.get(y) {
            Some(line) if y == 0 && game.is_game_over() => println!("   {}", line.bright_red()),
            Some(line) => println!("   {line}"),
            None => println!(),
        }

        if y < BOARD_SIZE - 1 {
            println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
}

fn legal_squares(game: &GameState, view: &ViewConfig) -> Vec<Square> {
    if view.show_legal_moves {
        game.legal_moves()
    } else {
        Vec::new()
    }
}

/// Squares grouped by row, top row first.
fn ranks() -> impl Iterator<Item = Vec<Square>> {
    (0..BOARD_SIZE).map(rank)
}

fn rank(row: usize) -> Vec<Square> {
    Square::iter().filter(|sq| sq.row() == row).collect()
}
