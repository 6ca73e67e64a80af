//! Breathing session state machine.
//!
//! Handles technique selection, start/pause/reset, and the phase-by-phase
//! countdown. The engine is driven externally: the presentation layer calls
//! [`SessionEngine::tick`] once per wall-clock second while the session is
//! playing, and every state change comes back as [`Event`]s.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::event::Event;
use crate::engine::technique::{Phase, Technique, PHASE_COUNT};
use crate::error::RespiraError;

/// The breathing session engine.
///
/// Owns the technique catalog and at most one active session. All control
/// operations either mutate state and return the events they produced, or
/// fail without touching state.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    catalog: Vec<Technique>,
    technique: Option<Technique>,
    phase_index: usize,
    cycle_index: u32,
    playing: bool,
    complete: bool,
    /// Seconds left in the current phase; 0 means the phase has not been
    /// entered yet.
    phase_remaining: u32,
    elapsed_seconds: u64,
    completed_cycles: u32,
    started_at: Option<DateTime<Utc>>,
}

impl SessionEngine {
    /// Create an engine over the given technique catalog.
    #[must_use]
    pub const fn new(catalog: Vec<Technique>) -> Self {
        Self {
            catalog,
            technique: None,
            phase_index: 0,
            cycle_index: 0,
            playing: false,
            complete: false,
            phase_remaining: 0,
            elapsed_seconds: 0,
            completed_cycles: 0,
            started_at: None,
        }
    }

    /// The technique catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Technique] {
        &self.catalog
    }

    /// The currently selected technique, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Technique> {
        self.technique.as_ref()
    }

    /// Select a technique by catalog index and reset the session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTechniqueIndex` if the index is out of range, or
    /// `InvalidTechnique` if the technique fails validation. State is
    /// unchanged on error.
    pub fn select(&mut self, index: usize) -> Result<Event, RespiraError> {
        let technique = self.catalog.get(index).ok_or(RespiraError::InvalidTechniqueIndex {
            index,
            count: self.catalog.len(),
        })?;
        technique.validate()?;

        let technique = technique.clone();
        let event = Event::Initialized {
            technique: technique.name.clone(),
            total_cycles: technique.cycles,
        };
        self.technique = Some(technique);
        self.reset();
        Ok(event)
    }

    /// Start or resume the session.
    ///
    /// Starting a fresh phase emits the phase-entry events; resuming a
    /// paused phase preserves its remaining time and emits nothing new.
    /// No-op while already playing or after completion.
    ///
    /// # Errors
    ///
    /// Returns `NoTechniqueSelected` if no technique has been selected.
    pub fn start(&mut self) -> Result<Vec<Event>, RespiraError> {
        if self.technique.is_none() {
            return Err(RespiraError::NoTechniqueSelected);
        }
        if self.playing || self.complete {
            return Ok(Vec::new());
        }

        self.playing = true;
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }

        let mut events = Vec::new();
        if self.phase_remaining == 0 {
            self.enter_phase(&mut events);
        }
        Ok(events)
    }

    /// Pause the session, preserving remaining phase time.
    ///
    /// No ticks are delivered while paused. No-op if not playing.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Reset the session to its initial state, keeping the selected
    /// technique.
    pub fn reset(&mut self) {
        self.playing = false;
        self.complete = false;
        self.phase_index = 0;
        self.cycle_index = 0;
        self.phase_remaining = 0;
        self.elapsed_seconds = 0;
        self.completed_cycles = 0;
        self.started_at = None;
    }

    /// Advance the session by one second.
    ///
    /// Returns the events produced: a `Tick`, plus any phase/cycle/session
    /// transitions it triggered. Returns nothing while paused or complete.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.playing || self.complete || self.phase_remaining == 0 {
            return events;
        }

        self.phase_remaining -= 1;
        self.elapsed_seconds += 1;
        events.push(Event::Tick {
            remaining: self.phase_remaining,
            elapsed: self.elapsed_seconds,
        });

        if self.phase_remaining == 0 {
            self.advance_phase(&mut events);
            self.enter_phase(&mut events);
        }
        events
    }

    /// Enter the phase at the current index, skipping zero-duration phases
    /// instantly. Emits `PhaseStarted` for the first timed phase reached, or
    /// runs the session to completion if none remains.
    fn enter_phase(&mut self, events: &mut Vec<Event>) {
        while !self.complete {
            let Some(technique) = self.technique.as_ref() else {
                return;
            };
            let seconds = technique.pattern[self.phase_index];
            if seconds > 0 {
                let phase = Phase::ALL[self.phase_index];
                let instruction = technique.instruction(phase).to_string();
                self.phase_remaining = seconds;
                events.push(Event::PhaseStarted { phase, instruction, seconds });
                return;
            }
            self.advance_phase(events);
        }
    }

    /// Move to the next phase index; on wrap, count the cycle and complete
    /// the session once the target cycle count is reached.
    fn advance_phase(&mut self, events: &mut Vec<Event>) {
        self.phase_index += 1;
        if self.phase_index < PHASE_COUNT {
            return;
        }

        self.phase_index = 0;
        self.cycle_index += 1;
        self.completed_cycles += 1;

        let total_cycles = self.technique.as_ref().map_or(0, |t| t.cycles);
        let percent = if total_cycles == 0 {
            100.0
        } else {
            f64::from(self.cycle_index) / f64::from(total_cycles) * 100.0
        };
        events.push(Event::CycleCompleted { cycle: self.cycle_index, percent });

        if self.cycle_index >= total_cycles {
            self.complete = true;
            self.playing = false;
            events.push(Event::SessionCompleted {
                completed_cycles: self.completed_cycles,
                elapsed: self.elapsed_seconds,
            });
        }
    }

    /// The current phase.
    #[must_use]
    pub const fn current_phase(&self) -> Phase {
        Phase::ALL[self.phase_index]
    }

    /// Instruction text for the current phase, if a technique is selected.
    #[must_use]
    pub fn current_instruction(&self) -> Option<&str> {
        self.technique.as_ref().map(|t| t.instruction(self.current_phase()))
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn phase_remaining(&self) -> u32 {
        self.phase_remaining
    }

    /// Total active seconds elapsed this session.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Completed cycles so far.
    #[must_use]
    pub const fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Target cycle count of the selected technique (0 if none).
    #[must_use]
    pub fn total_cycles(&self) -> u32 {
        self.technique.as_ref().map_or(0, |t| t.cycles)
    }

    /// Whether the session is currently playing.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the session has completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// When the session was first started, if it has been.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Session progress as a fraction of completed cycles (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.total_cycles();
        if total == 0 {
            return 0.0;
        }
        (f64::from(self.cycle_index) / f64::from(total)).min(1.0)
    }

    /// Summary statistics for the session, if a technique is selected.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.technique.as_ref().map(|t| SessionSummary {
            technique: t.name.clone(),
            completed_cycles: self.completed_cycles,
            total_cycles: t.cycles,
            elapsed_seconds: self.elapsed_seconds,
            started_at: self.started_at,
        })
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new(crate::engine::technique::builtin_catalog())
    }
}

/// Completion statistics for a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Technique display name.
    pub technique: String,
    /// Cycles completed.
    pub completed_cycles: u32,
    /// Target cycle count.
    pub total_cycles: u32,
    /// Total active seconds.
    pub elapsed_seconds: u64,
    /// When the session was first started.
    pub started_at: Option<DateTime<Utc>>,
}
