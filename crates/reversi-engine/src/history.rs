//! Move history with undo and reset.
//!
//! The history always holds the initial position followed by one snapshot per
//! applied move, so `len() == move_count() + 1`.

use crate::board::Board;
use crate::cell::Color;
use crate::error::GameError;
use crate::game_state::Status;
use crate::square::Square;

/// Immutable snapshot of the game after a move (or at the start).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    board: Board,
    status: Status,
    last_move: Option<Square>,
    flipped: Vec<Square>,
    pass: Option<Color>,
}

impl HistoryEntry {
    /// Snapshot of a starting position; carries no move.
    pub(crate) fn initial(board: Board, status: Status, pass: Option<Color>) -> Self {
        Self {
            board,
            status,
            last_move: None,
            flipped: Vec::new(),
            pass,
        }
    }

    pub(crate) fn after_move(
        board: Board,
        status: Status,
        sq: Square,
        flipped: Vec<Square>,
        pass: Option<Color>,
    ) -> Self {
        Self {
            board,
            status,
            last_move: Some(sq),
            flipped,
            pass,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status after this entry, including whose turn it is.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The move that produced this entry; `None` for the initial entry.
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// Discs flipped by the move that produced this entry.
    pub fn flipped(&self) -> &[Square] {
        &self.flipped
    }

    /// The color that had to pass right after this entry, if any.
    pub fn pass(&self) -> Option<Color> {
        self.pass
    }
}

/// Ordered snapshots from the initial position to the current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    initial: HistoryEntry,
    moves: Vec<HistoryEntry>,
}

impl History {
    pub(crate) fn new(initial: HistoryEntry) -> Self {
        Self {
            initial,
            moves: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        debug_assert!(entry.last_move.is_some(), "recorded entry without a move");
        self.moves.push(entry);
    }

    /// Drops the latest snapshot.
    ///
    /// # Returns
    ///
    /// The snapshot that is current after the undo.
    ///
    /// # Errors
    ///
    /// `GameError::NothingToUndo` if only the initial entry remains.
    pub(crate) fn undo(&mut self) -> Result<&HistoryEntry, GameError> {
        self.moves.pop().ok_or(GameError::NothingToUndo)?;
        Ok(self.current())
    }

    /// Drops every snapshot after the initial one.
    ///
    /// # Errors
    ///
    /// `GameError::NothingToReset` if only the initial entry remains.
    pub(crate) fn reset(&mut self) -> Result<&HistoryEntry, GameError> {
        if self.moves.is_empty() {
            return Err(GameError::NothingToReset);
        }
        self.moves.clear();
        Ok(&self.initial)
    }

    /// The latest snapshot.
    pub fn current(&self) -> &HistoryEntry {
        self.moves.last().unwrap_or(&self.initial)
    }

    pub fn initial(&self) -> &HistoryEntry {
        &self.initial
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.moves.len() + 1
    }

    /// Always `false`: the initial entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Whether undo and reset have anything to do.
    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Iterates over all snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        std::iter::once(&self.initial).chain(self.moves.iter())
    }

    /// Iterates over the squares played so far.
    pub fn moves(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().filter_map(|e| e.last_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> History {
        History::new(HistoryEntry::initial(
            Board::new(),
            Status::InProgress(Color::Dark),
            None,
        ))
    }

    fn entry(sq: Square) -> HistoryEntry {
        HistoryEntry::after_move(
            Board::empty(),
            Status::InProgress(Color::Light),
            sq,
            vec![Square::D4],
            None,
        )
    }

    #[test]
    fn test_new_history() {
        let history = history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.move_count(), 0);
        assert!(!history.can_undo());
        assert_eq!(history.current(), history.initial());
        assert_eq!(history.current().last_move(), None);
    }

    #[test]
    fn test_record_and_undo() {
        let mut history = history();
        history.record(entry(Square::D3));
        history.record(entry(Square::C3));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().last_move(), Some(Square::C3));
        assert_eq!(
            history.moves().collect::<Vec<_>>(),
            vec![Square::D3, Square::C3]
        );

        let current = history.undo().unwrap();
        assert_eq!(current.last_move(), Some(Square::D3));
        assert_eq!(history.len(), 2);

        let current = history.undo().unwrap();
        assert_eq!(current.board(), &Board::new());
        assert_eq!(history.undo(), Err(GameError::NothingToUndo));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut history = history();
        assert_eq!(history.reset(), Err(GameError::NothingToReset));

        history.record(entry(Square::D3));
        history.record(entry(Square::C3));
        let current = history.reset().unwrap();
        assert_eq!(current.status(), Status::InProgress(Color::Dark));
        assert_eq!(history.len(), 1);
        assert_eq!(history, self::history());
    }

    #[test]
    fn test_iter_starts_with_initial() {
        let mut history = history();
        history.record(entry(Square::D3));
        let entries: Vec<&HistoryEntry> = history.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].last_move(), None);
        assert_eq!(entries[1].last_move(), Some(Square::D3));
        assert_eq!(entries[1].flipped(), &[Square::D4]);
    }
}
