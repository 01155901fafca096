//! Rendering logic for the TUI.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use reversi_engine::cell::Color as DiscColor;
use reversi_engine::game_state::{GameResult, Status};

use super::app::{App, UiMode};
use super::widgets::{BoardArea, BoardWidget};
use crate::game::{describe_result, describe_status};

/// Main render function.
///
/// # Returns
///
/// Where the board cells were drawn, so clicks can be mapped back to squares.
pub fn render(frame: &mut Frame, app: &App) -> Option<BoardArea> {
    let area = frame.area();

    // Main layout: title, content, help bar
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(20),   // Content
        Constraint::Length(3), // Help bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    let board_area = render_content(frame, main_layout[1], app);
    render_help_bar(frame, main_layout[2], app);

    // Render overlays based on UI mode
    match app.ui_mode {
        UiMode::PassNotice(passed) => render_pass_popup(frame, passed, app),
        UiMode::GameOver(result) => render_game_over_popup(frame, result, app),
        UiMode::ConfirmReset => render_reset_dialog(frame),
        UiMode::ConfirmQuit => render_quit_dialog(frame),
        UiMode::Normal => {}
    }

    board_area
}

fn disc_style(color: DiscColor) -> Style {
    match color {
        DiscColor::Dark => Style::default().fg(Color::Green),
        DiscColor::Light => Style::default().fg(Color::Yellow),
    }
}

fn disc_glyph(color: DiscColor) -> &'static str {
    match color {
        DiscColor::Dark => "●",
        DiscColor::Light => "○",
    }
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Reversi ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Renders the main content area (board + info panel).
fn render_content(frame: &mut Frame, area: Rect, app: &App) -> Option<BoardArea> {
    let content_layout = Layout::horizontal([
        Constraint::Length(42), // Board area
        Constraint::Min(20),    // Info panel
    ])
    .split(area);

    let board_area = render_board(frame, content_layout[0], app);
    render_info_panel(frame, content_layout[1], app);
    board_area
}

/// Renders the game board.
fn render_board(frame: &mut Frame, area: Rect, app: &App) -> Option<BoardArea> {
    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Board ");

    let inner_area = board_block.inner(area);
    frame.render_widget(board_block, area);

    let legal_moves = if app.view.show_legal_moves {
        app.game.legal_moves()
    } else {
        Vec::new()
    };
    let last_move = app
        .game
        .last_move()
        .filter(|_| app.view.highlight_last_move);

    let board_widget = BoardWidget::new(app.game.board())
        .cursor(app.cursor.0, app.cursor.1)
        .last_move(last_move)
        .legal_moves(&legal_moves);

    frame.render_widget(board_widget, inner_area);
    BoardWidget::area_for(inner_area)
}

/// Renders the information panel.
fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Info ");

    let inner_area = info_block.inner(area);
    frame.render_widget(info_block, area);

    let status = app.game.status();
    let score = app.game.score();
    let mut lines = vec![Line::from("")];

    // Turn indicator
    match status {
        Status::InProgress(color) => lines.push(Line::from(Span::styled(
            format!("{color}'s turn ({})", disc_glyph(color)),
            disc_style(color),
        ))),
        Status::GameOver(_) => lines.push(Line::from(Span::styled(
            "*** Game Over ***",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))),
    }
    lines.push(Line::from(""));

    // Score
    lines.push(Line::from(vec![
        Span::raw("Dark: "),
        Span::styled(
            format!("{:>2}", app.view.format_count(status, score.dark)),
            disc_style(DiscColor::Dark),
        ),
        Span::raw("  "),
        Span::raw("Light: "),
        Span::styled(
            format!("{:>2}", app.view.format_count(status, score.light)),
            disc_style(DiscColor::Light),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("Moves: "),
        Span::styled(
            app.game.move_count().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]));

    if app.view.highlight_last_move {
        let last = match app.game.last_move() {
            Some(sq) => Span::styled(sq.to_string(), Style::default().fg(Color::Magenta)),
            None => Span::styled("--", Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![Span::raw("Last:  "), last]));
    }

    if let Some(passed) = app.game.last_pass()
        && !status.is_game_over()
    {
        lines.push(Line::from(Span::styled(
            format!("{passed} passed"),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(inner_area.width as usize)));

    // Move history, colored by the side that played
    let mut history = app.game.history().iter().skip(1).peekable();
    if history.peek().is_some() {
        lines.push(Line::from(Span::styled(
            "History:",
            Style::default().fg(Color::Cyan),
        )));

        let max_width = inner_area.width.saturating_sub(2) as usize;
        let mut current_spans: Vec<Span> = vec![Span::raw(" ")];
        let mut current_len = 1usize;
        let mut mover = app.game.history().initial().status().side_to_move();

        for entry in history {
            let Some(sq) = entry.last_move() else {
                continue;
            };
            let move_str = format!("{sq} ");
            let move_len = move_str.len();

            if current_len + move_len > max_width && current_len > 1 {
                lines.push(Line::from(current_spans));
                current_spans = vec![Span::raw(" ")];
                current_len = 1;
            }

            let style = mover.map(disc_style).unwrap_or_default();
            current_spans.push(Span::styled(move_str, style));
            current_len += move_len;
            mover = entry.status().side_to_move();
        }

        if current_len > 1 {
            lines.push(Line::from(current_spans));
        }
    }

    if let Status::GameOver(result) = status {
        lines.push(Line::from(""));
        lines.push(Line::from(result_span(result)));
    }

    // Status message
    if let Some(ref msg) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    let info = Paragraph::new(lines);
    frame.render_widget(info, inner_area);
}

fn result_span(result: GameResult) -> Span<'static> {
    let style = match result {
        GameResult::Winner(color) => disc_style(color),
        GameResult::Draw => Style::default().fg(Color::Cyan),
    };
    Span::styled(describe_result(result), style)
}

/// Renders the help bar at the bottom.
fn render_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let can_undo = app.can_undo();
    let help_items = [
        ("Enter", "Move", true),
        ("U", "Undo", can_undo),
        ("N", "New", can_undo),
        ("S", "Score", true),
        ("I", "Hints", true),
        ("T", "Last", true),
        ("Q", "Quit", true),
    ];

    let spans: Vec<Span> = help_items
        .iter()
        .flat_map(|&(key, desc, enabled)| {
            let (key_style, desc_style) = if enabled {
                (
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                    Style::default(),
                )
            } else {
                (
                    Style::default().fg(Color::Black).bg(Color::DarkGray),
                    Style::default().fg(Color::DarkGray),
                )
            };
            vec![
                Span::styled(format!(" [{key}] "), key_style),
                Span::styled(format!("{desc} "), desc_style),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

/// Renders the forced-pass popup.
fn render_pass_popup(frame: &mut Frame, passed: DiscColor, app: &App) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{passed} has no legal move"),
            disc_style(passed).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(describe_status(app.game.status())),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Pass "),
    );
    frame.render_widget(popup, area);
}

/// Renders the game-over popup. The score is always shown here.
fn render_game_over_popup(frame: &mut Frame, result: GameResult, app: &App) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let score = app.game.score();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "*** Game Over ***",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(result_span(result)),
        Line::from(vec![
            Span::raw("Dark: "),
            Span::styled(score.dark.to_string(), disc_style(DiscColor::Dark)),
            Span::raw("  Light: "),
            Span::styled(score.light.to_string(), disc_style(DiscColor::Light)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Close  N: New game",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Result "),
    );
    frame.render_widget(popup, area);
}

/// Renders the reset confirmation dialog.
fn render_reset_dialog(frame: &mut Frame) {
    render_confirm_dialog(frame, "Discard this game and start over?");
}

/// Renders the quit confirmation dialog.
fn render_quit_dialog(frame: &mut Frame) {
    render_confirm_dialog(frame, "Quit Reversi?");
}

fn render_confirm_dialog(frame: &mut Frame, question: &str) {
    let area = centered_rect(40, 15, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            question,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Y to confirm, N to cancel"),
    ];

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm "),
    );
    frame.render_widget(dialog, area);
}

/// Creates a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(app: &App) -> (Buffer, Option<BoardArea>) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut board_area = None;
        terminal
            .draw(|frame| board_area = render(frame, app))
            .unwrap();
        (terminal.backend().buffer().clone(), board_area)
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_board_area_matches_layout() {
        let app = App::new(ViewConfig::default());
        let (buf, board_area) = draw(&app);
        let board_area = board_area.unwrap();

        // Title takes 3 rows, the board block adds a border.
        assert_eq!(board_area.cell_at(4, 6), Some((0, 0)));
        // The light disc on d4 is drawn where the click mapping says d4 is.
        assert_eq!(board_area.cell_at(4 + 3 * 4 + 1, 6 + 3 * 2), Some((3, 3)));
        assert_eq!(buf[(4 + 3 * 4 + 1, 6 + 3 * 2)].symbol(), "○");
    }

    #[test]
    fn test_hidden_score_renders_question_marks() {
        let mut app = App::new(ViewConfig::default());
        app.view.show_score = false;
        let (buf, _) = draw(&app);
        let text = screen_text(&buf);
        assert!(text.contains("Dark:  ?"));
        assert!(text.contains("Light:  ?"));
    }

    #[test]
    fn test_confirm_dialog_drawn() {
        let mut app = App::new(ViewConfig::default());
        app.ui_mode = UiMode::ConfirmReset;
        let (buf, _) = draw(&app);
        let text = screen_text(&buf);
        assert!(text.contains("Discard this game and start over?"));
    }
}
