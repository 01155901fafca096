//! Cell contents and disc colors.

use std::fmt;

/// Represents the contents of a single cell.
///
/// The `Cell` enum has three variants:
///
/// * `Empty` - No disc has been placed here.
/// * `Dark` - A dark disc.
/// * `Light` - A light disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'X'` for `Cell::Dark`
    /// * `'O'` for `Cell::Light`
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }

    /// Parses a cell from its character representation.
    ///
    /// Accepts `X`/`x`/`*` for dark, `O`/`o` for light and `-`/`.` for empty.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' => Some(Cell::Empty),
            'X' | 'x' | '*' => Some(Cell::Dark),
            'O' | 'o' => Some(Cell::Light),
            _ => None,
        }
    }

    /// Returns the color of the disc in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Color::Dark),
            Cell::Light => Some(Color::Light),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The two sides of the game. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    /// Returns the opposing color.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Dark => "Dark",
            Color::Light => "Light",
        }
    }
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Cell {
        match color {
            Color::Dark => Cell::Dark,
            Color::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
