//! Terminal User Interface (TUI) for the focus timer.
//!
//! Drives the timer at one tick per second while polling for key events.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Prompt};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::SmarttimeError;
use crate::storage::DataStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: &DataStore, config: &Config) -> Result<(), SmarttimeError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| SmarttimeError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| SmarttimeError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SmarttimeError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(store, config)?;
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// Events are polled with whatever remains of the current one-second window,
/// so key handling stays responsive without drifting the tick cadence.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), SmarttimeError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SmarttimeError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(event::Action::Quit) = event::handle_events(app, timeout)? {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick()?;
            last_tick = Instant::now();
        }
    }

    Ok(())
}
