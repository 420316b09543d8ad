//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::SmarttimeError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Waits up to `timeout` for a key event so the caller can keep its one
/// second tick cadence. Returns an action to take, or None if no action is
/// needed.
///
/// # Errors
///
/// Returns an error if event polling fails or a key handler fails to save.
pub fn handle_events(
    app: &mut App<'_>,
    timeout: Duration,
) -> Result<Option<Action>, SmarttimeError> {
    if !event::poll(timeout)
        .map_err(|e| SmarttimeError::Config(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| SmarttimeError::Config(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    // A pending completion prompt captures y/n before anything else.
    if app.prompt.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.answer_prompt(true),
            KeyCode::Char('n') | KeyCode::Esc => app.answer_prompt(false),
            _ => {}
        }
        return Ok(None);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        // Timer controls
        KeyCode::Char(' ') => app.toggle_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('m') => app.switch_mode(),
        KeyCode::Char('b') => app.switch_phase(),
        KeyCode::Char('f') => app.finish_stopwatch()?,

        // Duration adjustments
        KeyCode::Char('+' | '=') => app.adjust_focus_minutes(5),
        KeyCode::Char('-' | '_') => app.adjust_focus_minutes(-5),
        KeyCode::Char(']') => app.adjust_break_minutes(1),
        KeyCode::Char('[') => app.adjust_break_minutes(-1),

        // Task selection - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "space:start/pause | m:mode | b:phase | r:reset | f:finish | j/k:task | q:quit"
                    .to_string(),
            );
        }

        _ => {}
    }

    Ok(None)
}
