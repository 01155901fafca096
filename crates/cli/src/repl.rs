//! Line-mode front-end driven by typed commands.

use std::str::FromStr;

use reversi_engine::game_state::{GameState, MoveOutcome, Status};
use reversi_engine::square::Square;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::config::{ViewConfig, ViewToggle};
use crate::game::{self, describe_result, describe_score};

const HELP: &str = "\
Commands:
  <square>       play a move, e.g. d3
  undo, u        take back the last move
  reset, n       start over (asks first)
  score, s       print the disc counts
  toggle <what>  show or hide: score, hints, last
  help, ?        show this text
  quit, q        leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Square),
    Undo,
    Reset,
    Score,
    Toggle(ViewToggle),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Err("Empty command".to_string());
        };

        match cmd.to_ascii_lowercase().as_str() {
            "undo" | "u" => Ok(Command::Undo),
            "reset" | "new" | "n" => Ok(Command::Reset),
            "score" | "s" => Ok(Command::Score),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "toggle" | "t" => match parts.next() {
                Some(what) => what.parse().map(Command::Toggle),
                None => Err("Usage: toggle score|hints|last".to_string()),
            },
            other => other
                .parse::<Square>()
                .map(Command::Play)
                .map_err(|_| format!("Unknown command '{other}' (type 'help')")),
        }
    }
}

/// A game plus the view settings it is shown with.
#[derive(Debug, Default)]
pub struct Session {
    pub game: GameState,
    pub view: ViewConfig,
}

impl Session {
    pub fn new(view: ViewConfig) -> Self {
        Self {
            game: GameState::new(),
            view,
        }
    }

    /// Runs one command against the game or the view.
    ///
    /// # Returns
    ///
    /// A message for the user, if the command has something to say.
    ///
    /// # Errors
    ///
    /// A message describing why the command was rejected. The game is left
    /// unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, String> {
        match command {
            Command::Play(sq) => {
                let outcome = self.game.make_move(sq).map_err(|e| e.to_string())?;
                Ok(self.describe_outcome(&outcome))
            }
            Command::Undo => {
                self.game.undo().map_err(|e| e.to_string())?;
                Ok(Some("Move undone".to_string()))
            }
            Command::Reset => {
                self.game.reset().map_err(|e| e.to_string())?;
                Ok(Some("New game started".to_string()))
            }
            Command::Score => Ok(Some(describe_score(&self.game, &self.view))),
            Command::Toggle(toggle) => {
                let shown = self.view.toggle(toggle);
                let state = if shown { "shown" } else { "hidden" };
                Ok(Some(format!("{toggle} {state}")))
            }
            Command::Help => Ok(Some(HELP.to_string())),
            Command::Quit => Ok(None),
        }
    }

    fn describe_outcome(&self, outcome: &MoveOutcome) -> Option<String> {
        match outcome.status {
            Status::GameOver(result) => {
                let score = self.game.score();
                Some(format!(
                    "Game over: {} (Dark {} - Light {})",
                    describe_result(result),
                    score.dark,
                    score.light
                ))
            }
            Status::InProgress(next) => {
                let passed = outcome.pass?;
                Some(format!("{passed} cannot move and passes. {next} plays again."))
            }
        }
    }
}

/// Main loop of the line mode.
pub fn ui_loop(view: ViewConfig) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut session = Session::new(view);

    loop {
        game::print_board(&session.game, &session.view);
        println!();

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.to_string()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}\n");
                continue;
            }
        };
        debug!(?command, "line command");

        if command == Command::Quit {
            break;
        }
        if command == Command::Reset
            && session.game.can_undo()
            && !confirm(&mut rl, "Discard the current game?")?
        {
            continue;
        }

        match session.execute(command) {
            Ok(Some(message)) => println!("{message}\n"),
            Ok(None) => {}
            Err(e) => println!("{e}\n"),
        }
    }

    Ok(())
}

/// Asks a yes/no question; anything but `y` counts as no.
fn confirm(rl: &mut DefaultEditor, question: &str) -> Result<bool, String> {
    match rl.readline(&format!("{question} [y/N] ")) {
        Ok(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::cell::Color;

    #[test]
    fn test_parse_commands() {
        assert_eq!("d3".parse(), Ok(Command::Play(Square::D3)));
        assert_eq!(" D3 ".parse(), Ok(Command::Play(Square::D3)));
        assert_eq!("undo".parse(), Ok(Command::Undo));
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("score".parse(), Ok(Command::Score));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!(
            "toggle hints".parse(),
            Ok(Command::Toggle(ViewToggle::LegalMoves))
        );
        assert!("toggle".parse::<Command>().is_err());
        assert!("z9".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_play_and_undo() {
        let mut session = Session::default();
        assert_eq!(session.execute(Command::Play(Square::D3)), Ok(None));
        assert_eq!(session.game.side_to_move(), Some(Color::Light));

        assert!(session.execute(Command::Undo).is_ok());
        assert_eq!(session.game, GameState::new());
        assert_eq!(
            session.execute(Command::Undo),
            Err("nothing to undo".to_string())
        );
    }

    #[test]
    fn test_illegal_move_leaves_game_unchanged() {
        let mut session = Session::default();
        let err = session.execute(Command::Play(Square::A1)).unwrap_err();
        assert!(err.contains("a1"));
        assert_eq!(session.game, GameState::new());
    }

    #[test]
    fn test_toggle_changes_only_view() {
        let mut session = Session::default();
        let message = session.execute(Command::Toggle(ViewToggle::Score)).unwrap();
        assert_eq!(message.as_deref(), Some("score hidden"));
        assert!(!session.view.show_score);
        assert_eq!(session.game, GameState::new());
        assert_eq!(
            session.execute(Command::Score).unwrap().as_deref(),
            Some("Dark: ?  Light: ?")
        );
    }

    #[test]
    fn test_reset() {
        let mut session = Session::default();
        assert!(session.execute(Command::Reset).is_err());
        session.execute(Command::Play(Square::D3)).unwrap();
        session.execute(Command::Play(Square::C3)).unwrap();
        assert!(session.execute(Command::Reset).is_ok());
        assert_eq!(session.game, GameState::new());
    }
}
