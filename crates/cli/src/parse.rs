//! Parsing helpers for move records.

use reversi_engine::square::Square;

/// Parses a concatenated move string like "f5d6c3" into a list of squares.
///
/// Reads two characters at a time, interpreting each pair as a square in algebraic notation.
pub fn parse_move_string(input: &str) -> Result<Vec<Square>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if !input.is_ascii() {
        return Err("Input must be ASCII".to_string());
    }
    if !input.len().is_multiple_of(2) {
        return Err("Input length must be even (each move is 2 characters)".to_string());
    }

    let mut moves = Vec::new();
    for i in (0..input.len()).step_by(2) {
        let move_str = &input[i..i + 2];
        match move_str.parse::<Square>() {
            Ok(sq) => moves.push(sq),
            Err(_) => {
                return Err(format!(
                    "Invalid square at position {}: '{move_str}'",
                    (i / 2) + 1
                ));
            }
        }
    }
    Ok(moves)
}
