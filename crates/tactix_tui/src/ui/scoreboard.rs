//! Scoreboard strip rendering.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the running score: X wins, O wins, draws.
pub fn render_scoreboard(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let scores = app.scores();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Score")
        .border_style(Style::default().fg(palette.grid));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(inner);

    let x_wins = Paragraph::new(format!("X  {} Wins", scores.wins_x()))
        .style(
            Style::default()
                .fg(palette.mark_x)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(x_wins, columns[0]);

    let o_wins = Paragraph::new(format!("O  {} Wins", scores.wins_o()))
        .style(
            Style::default()
                .fg(palette.mark_o)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(o_wins, columns[1]);

    let draws = Paragraph::new(format!("=  {} Draws", scores.draws()))
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    f.render_widget(draws, columns[2]);
}
