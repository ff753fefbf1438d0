//! Terminal UI: renders the board and turns key presses and mouse clicks
//! into session clicks.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictac_board::BOARD_SIZE;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// Logging goes to the configured log file so it does not interfere with
/// the screen.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tictac TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = GameSession::new(BOARD_SIZE, config.player_symbols());
    let res = run_app(&mut terminal, App::new(session));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Draw, wait for one event, handle it, deliver announcements. Repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.set_viewport(frame.area());
            ui::draw(frame, &app);
        })?;

        if app.should_quit() {
            return Ok(());
        }

        app.handle_event(event::read()?);
        app.drain_announcements();
    }
}
