//! Full-screen terminal interface for playing Reversi.
//!
//! This module provides a terminal interface using ratatui, supporting
//! keyboard navigation and mouse input.

mod app;
mod event;
mod render;
mod widgets;

use app::App;

use crate::config::ViewConfig;

/// Runs the TUI until the user quits.
pub fn run(view: ViewConfig) -> Result<(), String> {
    let app = App::new(view);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
