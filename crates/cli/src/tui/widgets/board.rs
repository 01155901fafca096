//! Board widget for rendering the Reversi game board.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use reversi_engine::{board::Board, cell::Cell, constants::BOARD_SIZE, square::Square};

const MIN_WIDTH: u16 = 36;
const MIN_HEIGHT: u16 = 19;
/// Offset of the first cell from the left edge of the widget ("1 │").
const CELL_OFFSET_X: u16 = 3;
/// Offset of the first cell row from the top (column header and top border).
const CELL_OFFSET_Y: u16 = 2;
/// Each cell is 4 chars wide (" X │")
const CELL_WIDTH: u16 = 4;
/// Each cell is 2 rows tall (content + separator)
const CELL_HEIGHT: u16 = 2;

/// Screen geometry of the drawn cells, used to translate mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardArea {
    origin_x: u16,
    origin_y: u16,
}

impl BoardArea {
    /// Maps a terminal position to a board `(row, col)`, if it hits a cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let dx = column.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;
        let col = (dx / CELL_WIDTH) as usize;
        let row = (dy / CELL_HEIGHT) as usize;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }
}

/// Widget for rendering the Reversi game board.
pub struct BoardWidget<'a> {
    board: &'a Board,
    /// Cursor position (row, col)
    cursor: (usize, usize),
    /// Highlighted last move, if any
    last_move: Option<Square>,
    /// Squares marked as playable
    legal_moves: &'a [Square],
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
            last_move: None,
            legal_moves: &[],
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = (row, col);
        self
    }

    /// Sets the last move.
    pub fn last_move(mut self, sq: Option<Square>) -> Self {
        self.last_move = sq;
        self
    }

    /// Sets the squares drawn as legal moves.
    pub fn legal_moves(mut self, squares: &'a [Square]) -> Self {
        self.legal_moves = squares;
        self
    }

    /// Returns where the cells land when the widget is drawn into `area`.
    ///
    /// `None` if the area is too small for the board to be drawn.
    pub fn area_for(area: Rect) -> Option<BoardArea> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }
        Some(BoardArea {
            origin_x: area.x + CELL_OFFSET_X,
            origin_y: area.y + CELL_OFFSET_Y,
        })
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if Self::area_for(area).is_none() {
            return;
        }

        // Column headers
        let label_style = Style::default().fg(Color::Cyan);
        let mut header = vec![Span::raw("  ")];
        for file in 'a'..='h' {
            header.push(Span::raw("  "));
            header.push(Span::styled(file.to_string(), label_style));
            header.push(Span::raw(" "));
        }
        buf.set_line(area.x, area.y, &Line::from(header), area.width);

        let top_border = "  ┌───┬───┬───┬───┬───┬───┬───┬───┐";
        buf.set_string(area.x, area.y + 1, top_border, Style::default());

        for sq in Square::iter() {
            let (row, col) = (sq.row(), sq.col());
            let y = area.y + CELL_OFFSET_Y + (row as u16) * CELL_HEIGHT;

            if col == 0 {
                let row_num = format!("{} │", row + 1);
                buf.set_string(area.x, y, &row_num, Style::default().fg(Color::Cyan));
            }

            let (content, mut style) = match self.board.cell(sq) {
                Cell::Dark => (" ● ", Style::default().fg(Color::Green)),
                Cell::Light => (" ○ ", Style::default().fg(Color::Yellow)),
                Cell::Empty if self.legal_moves.contains(&sq) => {
                    (" · ", Style::default().fg(Color::DarkGray))
                }
                Cell::Empty => ("   ", Style::default()),
            };

            if self.cursor == (row, col) {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            if self.last_move == Some(sq) {
                style = style.bg(Color::Rgb(50, 50, 80));
            }

            let x = area.x + CELL_OFFSET_X + (col as u16) * CELL_WIDTH;
            buf.set_string(x, y, content, style);
            buf.set_string(x + 3, y, "│", Style::default());

            if col == BOARD_SIZE - 1 && row < BOARD_SIZE - 1 {
                let separator = "  ├───┼───┼───┼───┼───┼───┼───┼───┤";
                buf.set_string(area.x, y + 1, separator, Style::default());
            }
        }

        let bottom_border = "  └───┴───┴───┴───┴───┴───┴───┴───┘";
        buf.set_string(area.x, area.y + 17, bottom_border, Style::default());

        if let Ok(cursor_sq) = Square::from_col_row(self.cursor.1, self.cursor.0) {
            let cursor_info = format!("  Cursor: {cursor_sq}");
            buf.set_string(
                area.x,
                area.y + 18,
                &cursor_info,
                Style::default().fg(Color::Cyan),
            );
        }
    }
}
