//! Tactix terminal UI.
//!
//! Themed tic-tac-toe for two players at one keyboard, with a running
//! scoreboard. Game rules live in the `tactix` crate; this binary only
//! renders and routes input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod input;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppTransition};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Tactix - themed tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tactix_tui")]
#[command(about = "Themed tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the theme preference file (written on every theme change)
    #[arg(long, default_value = "tactix_prefs.toml")]
    prefs: PathBuf,

    /// Log file path (logs stay out of the terminal UI)
    #[arg(long, default_value = "tactix_tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output never corrupts the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting tactix TUI");
    run(cli.prefs)
}

/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop errors.
fn run(prefs_path: PathBuf) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(prefs_path);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Synchronous event loop: draw, wait for a key, handle it to completion.
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == AppTransition::Quit {
                    return Ok(());
                }
            }
        }
    }
}
