//! UI rendering using ratatui.

mod board;
mod scoreboard;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use board::render_board;
pub use scoreboard::render_scoreboard;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme().palette();

    // Paint the themed background before anything else.
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tactix - Tic-Tac-Toe")
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.grid)),
        );
    f.render_widget(title, chunks[0]);

    render_scoreboard(f, chunks[1], app);
    render_board(f, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status")
                .border_style(Style::default().fg(palette.grid)),
        );
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-9 / arrows + Enter: place | R: Reset board | T: Theme | Q: Quit")
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.grid)),
        );
    f.render_widget(help, chunks[4]);
}
