//! View settings shared by every front-end.
//!
//! Toggling a setting only changes what is drawn; the game itself is never
//! touched.

use std::fmt;
use std::str::FromStr;

use reversi_engine::game_state::Status;

/// What the renderers show besides the discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Show disc counts while the game is running.
    pub show_score: bool,
    /// Mark the squares the side to move may play.
    pub show_legal_moves: bool,
    /// Highlight the square of the latest move.
    pub highlight_last_move: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            show_score: true,
            show_legal_moves: true,
            highlight_last_move: true,
        }
    }
}

impl ViewConfig {
    /// Flips one setting and returns its new value.
    pub fn toggle(&mut self, toggle: ViewToggle) -> bool {
        let flag = match toggle {
            ViewToggle::Score => &mut self.show_score,
            ViewToggle::LegalMoves => &mut self.show_legal_moves,
            ViewToggle::LastMove => &mut self.highlight_last_move,
        };
        *flag = !*flag;
        *flag
    }

    /// Whether counts are drawn. A finished game always shows them.
    pub fn score_visible(&self, status: Status) -> bool {
        self.show_score || status.is_game_over()
    }

    /// Formats a disc count, or `?` while the score is hidden.
    pub fn format_count(&self, status: Status, count: u32) -> String {
        if self.score_visible(status) {
            count.to_string()
        } else {
            "?".to_string()
        }
    }
}

/// A single view setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewToggle {
    Score,
    LegalMoves,
    LastMove,
}

impl ViewToggle {
    pub fn name(self) -> &'static str {
        match self {
            ViewToggle::Score => "score",
            ViewToggle::LegalMoves => "hints",
            ViewToggle::LastMove => "last move",
        }
    }
}

impl fmt::Display for ViewToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(ViewToggle::Score),
            "hints" | "moves" => Ok(ViewToggle::LegalMoves),
            "last" => Ok(ViewToggle::LastMove),
            other => Err(format!(
                "Unknown setting '{other}' (expected score, hints or last)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::cell::Color;
    use reversi_engine::game_state::GameResult;

    #[test]
    fn test_default_shows_everything() {
        let view = ViewConfig::default();
        assert!(view.show_score);
        assert!(view.show_legal_moves);
        assert!(view.highlight_last_move);
    }

    #[test]
    fn test_toggle() {
        let mut view = ViewConfig::default();
        assert!(!view.toggle(ViewToggle::Score));
        assert!(!view.show_score);
        assert!(view.toggle(ViewToggle::Score));
        assert!(!view.toggle(ViewToggle::LegalMoves));
        assert!(!view.toggle(ViewToggle::LastMove));
        assert_eq!(
            view,
            ViewConfig {
                show_score: true,
                show_legal_moves: false,
                highlight_last_move: false,
            }
        );
    }

    #[test]
    fn test_hidden_score_renders_question_mark() {
        let view = ViewConfig {
            show_score: false,
            ..ViewConfig::default()
        };
        let running = Status::InProgress(Color::Dark);
        assert_eq!(view.format_count(running, 12), "?");

        let over = Status::GameOver(GameResult::Draw);
        assert!(view.score_visible(over));
        assert_eq!(view.format_count(over, 32), "32");
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!("score".parse::<ViewToggle>(), Ok(ViewToggle::Score));
        assert_eq!("Hints".parse::<ViewToggle>(), Ok(ViewToggle::LegalMoves));
        assert_eq!("last".parse::<ViewToggle>(), Ok(ViewToggle::LastMove));
        assert!("colors".parse::<ViewToggle>().is_err());
    }
}
