//! Terminal User Interface (TUI) for respira.
//!
//! Provides a full-screen guided breathing session: technique selection,
//! live phase countdown, and completion statistics.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Screen};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::RespiraError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), RespiraError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| RespiraError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| RespiraError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| RespiraError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(config.catalog());
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
/// Terminal events are polled at 100ms; while a session is playing the
/// engine is ticked once per wall-clock second.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), RespiraError> {
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| RespiraError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Choose => app.choose_selected()?,
                event::Action::TogglePlay => app.toggle_play()?,
                event::Action::Reset => app.reset_session(),
                event::Action::ChangeTechnique => app.change_technique(),
                event::Action::NewSession => app.new_session(),
            }
        }

        // Drive the session clock
        if app.engine.is_playing() {
            if last_tick.elapsed() >= Duration::from_secs(1) {
                app.on_tick();
                last_tick = Instant::now();
            }
        } else {
            // Paused or idle: the next tick lands a full second after resume
            last_tick = Instant::now();
        }
    }

    Ok(())
}
