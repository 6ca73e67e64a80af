//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::RespiraError;
use crate::tui::app::{App, Screen};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Select the highlighted technique.
    Choose,
    /// Start or pause the session.
    TogglePlay,
    /// Reset the session.
    Reset,
    /// Return to technique selection.
    ChangeTechnique,
    /// Start over from the completion screen.
    NewSession,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, RespiraError> {
    // Poll for events with a small timeout so the session clock keeps running
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| RespiraError::Config(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| RespiraError::Config(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    if key.code == KeyCode::Char('q') {
        return Ok(Some(Action::Quit));
    }

    Ok(match app.screen {
        Screen::Techniques => handle_techniques_key(app, key.code),
        Screen::Breathing => handle_breathing_key(key.code),
        Screen::Complete => handle_complete_key(key.code),
    })
}

fn handle_techniques_key(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Enter => return Some(Action::Choose),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        _ => {}
    }
    None
}

fn handle_breathing_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(' ') => Some(Action::TogglePlay),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('t') | KeyCode::Esc => Some(Action::ChangeTechnique),
        _ => None,
    }
}

fn handle_complete_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('n') | KeyCode::Enter | KeyCode::Esc => Some(Action::NewSession),
        _ => None,
    }
}
