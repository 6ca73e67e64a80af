//! Session events.
//!
//! Everything the engine tells the outside world flows through [`Event`].
//! Presentation layers (console runner, TUI) consume the stream and render
//! it however they like; `--output json` serializes events directly.

use serde::Serialize;

use crate::engine::technique::Phase;

/// An event emitted by the session engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A technique was selected and the session reset.
    Initialized {
        /// Technique display name.
        technique: String,
        /// Target number of cycles.
        total_cycles: u32,
    },
    /// A timed phase began.
    PhaseStarted {
        /// Which phase.
        phase: Phase,
        /// Instruction text for the phase.
        instruction: String,
        /// Phase duration in seconds.
        seconds: u32,
    },
    /// One second of an active phase elapsed.
    Tick {
        /// Seconds remaining in the current phase.
        remaining: u32,
        /// Total active seconds elapsed this session.
        elapsed: u64,
    },
    /// A full 4-phase cycle finished.
    CycleCompleted {
        /// Completed cycle count so far.
        cycle: u32,
        /// Progress through the session, 0-100.
        percent: f64,
    },
    /// The session reached its target cycle count.
    SessionCompleted {
        /// Cycles completed.
        completed_cycles: u32,
        /// Total active seconds.
        elapsed: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = Event::PhaseStarted {
            phase: Phase::Inhale,
            instruction: "Breathe in".to_string(),
            seconds: 4,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "phase_started");
        assert_eq!(json["phase"], "inhale");
        assert_eq!(json["seconds"], 4);
    }

    #[test]
    fn test_tick_json_shape() {
        let event = Event::Tick { remaining: 3, elapsed: 12 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "tick");
        assert_eq!(json["remaining"], 3);
        assert_eq!(json["elapsed"], 12);
    }
}
