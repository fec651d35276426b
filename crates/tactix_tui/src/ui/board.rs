//! Board grid rendering.

use crate::app::App;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tactix::{Line, Player, Position, Square};

/// Renders the 3x3 board with the active theme's colors.
///
/// Squares on the winning line are highlighted using the line reported by
/// the game's outcome.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let win_line = app.game().outcome().line();
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0, &palette, win_line);
    render_separator(f, rows[1], &palette);
    render_row(f, rows[2], app, 1, &palette, win_line);
    render_separator(f, rows[3], &palette);
    render_row(f, rows[4], app, 2, &palette, win_line);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    app: &App,
    row: usize,
    palette: &Palette,
    win_line: Option<Line>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (slot, col) in [(0, 0), (2, 1), (4, 2)] {
        let pos = Position::from_row_col(row, col).expect("row and col are in range");
        render_square(f, cols[slot], app, pos, palette, win_line);
    }
    render_vertical_sep(f, cols[1], palette);
    render_vertical_sep(f, cols[3], palette);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    palette: &Palette,
    win_line: Option<Line>,
) {
    let square = app.game().board().get(pos);
    let on_win_line = win_line.is_some_and(|line| line.contains(&pos));

    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(palette.grid),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.mark_x)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.mark_o)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if on_win_line {
        style = style.bg(palette.win_line).add_modifier(Modifier::BOLD);
    }
    if app.cursor() == pos && !app.game().outcome().is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.grid));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(palette.grid))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
