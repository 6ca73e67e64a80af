//! Application state for the TUI.

use crate::engine::{Event, SessionEngine, SessionSummary, Technique};
use crate::error::RespiraError;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Technique selection list.
    Techniques,
    /// Active breathing session.
    Breathing,
    /// Completion statistics.
    Complete,
}

/// Application state.
pub struct App {
    /// The session engine.
    pub engine: SessionEngine,
    /// Current screen.
    pub screen: Screen,
    /// Cursor position in the technique list.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Summary of the finished session, once complete.
    pub summary: Option<SessionSummary>,
}

impl App {
    /// Create a new app instance over the given catalog.
    #[must_use]
    pub fn new(catalog: Vec<Technique>) -> Self {
        Self {
            engine: SessionEngine::new(catalog),
            screen: Screen::Techniques,
            selected: 0,
            status: None,
            summary: None,
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let count = self.engine.catalog().len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// Jump to first item.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last item.
    pub fn select_last(&mut self) {
        let count = self.engine.catalog().len();
        if count > 0 {
            self.selected = count - 1;
        }
    }

    /// Select the highlighted technique and move to the breathing screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is invalid.
    pub fn choose_selected(&mut self) -> Result<(), RespiraError> {
        let event = self.engine.select(self.selected)?;
        if let Event::Initialized { technique, total_cycles } = event {
            self.status = Some(format!("{technique}: {total_cycles} cycles. Space to begin"));
        }
        self.summary = None;
        self.screen = Screen::Breathing;
        Ok(())
    }

    /// Start or pause the session.
    ///
    /// # Errors
    ///
    /// Returns an error if no technique is selected.
    pub fn toggle_play(&mut self) -> Result<(), RespiraError> {
        if self.engine.is_playing() {
            self.engine.pause();
            self.status = Some("Paused. Space to resume".to_string());
        } else {
            let events = self.engine.start()?;
            self.status = None;
            self.apply_events(&events);
        }
        Ok(())
    }

    /// Reset the session to the beginning of the technique.
    pub fn reset_session(&mut self) {
        self.engine.reset();
        self.summary = None;
        self.screen = Screen::Breathing;
        self.status = Some("Session reset. Space to begin".to_string());
    }

    /// Abandon the session and return to technique selection.
    pub fn change_technique(&mut self) {
        self.engine.reset();
        self.summary = None;
        self.screen = Screen::Techniques;
        self.status = None;
    }

    /// Leave the completion screen and pick a new technique.
    pub fn new_session(&mut self) {
        self.change_technique();
    }

    /// Advance the session clock by one second.
    pub fn on_tick(&mut self) {
        let events = self.engine.tick();
        self.apply_events(&events);
    }

    /// Fold a batch of engine events into display state.
    fn apply_events(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::CycleCompleted { cycle, .. } => {
                    self.status = Some(format!(
                        "Cycle {cycle} of {} complete",
                        self.engine.total_cycles()
                    ));
                }
                Event::SessionCompleted { .. } => {
                    self.summary = self.engine.summary();
                    self.screen = Screen::Complete;
                    self.status = None;
                }
                Event::Initialized { .. }
                | Event::PhaseStarted { .. }
                | Event::Tick { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{builtin_catalog, custom_technique};

    fn app() -> App {
        App::new(builtin_catalog())
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_last();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 2);

        app.select_first();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_choose_selected_moves_to_breathing() {
        let mut app = app();
        app.selected = 1;
        app.choose_selected().unwrap();

        assert_eq!(app.screen, Screen::Breathing);
        assert_eq!(app.engine.selected().unwrap().name, "Four Directions");
        assert!(!app.engine.is_playing());
    }

    #[test]
    fn test_toggle_play() {
        let mut app = app();
        app.choose_selected().unwrap();

        app.toggle_play().unwrap();
        assert!(app.engine.is_playing());

        app.toggle_play().unwrap();
        assert!(!app.engine.is_playing());
    }

    #[test]
    fn test_session_completion_switches_screen() {
        let mut app = App::new(vec![custom_technique("Pulse", [1, 0, 0, 0], 1)]);
        app.choose_selected().unwrap();
        app.toggle_play().unwrap();
        app.on_tick();

        assert_eq!(app.screen, Screen::Complete);
        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.completed_cycles, 1);
        assert_eq!(summary.elapsed_seconds, 1);
    }

    #[test]
    fn test_change_technique_resets() {
        let mut app = app();
        app.choose_selected().unwrap();
        app.toggle_play().unwrap();
        app.on_tick();

        app.change_technique();
        assert_eq!(app.screen, Screen::Techniques);
        assert_eq!(app.engine.elapsed_seconds(), 0);
        assert!(!app.engine.is_playing());
    }

    #[test]
    fn test_cycle_status_message() {
        let mut app = App::new(vec![custom_technique("Pulse", [1, 0, 0, 0], 2)]);
        app.choose_selected().unwrap();
        app.toggle_play().unwrap();
        app.on_tick();

        assert_eq!(app.status.as_deref(), Some("Cycle 1 of 2 complete"));
    }
}
