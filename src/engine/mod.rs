//! Breathing session engine.
//!
//! The core of respira: techniques, the phase-by-phase session state
//! machine, and the event stream it produces. The engine is deterministic
//! and externally driven - the presentation layer calls [`SessionEngine::tick`]
//! once per second; the engine itself never touches the wall clock except to
//! stamp the session start time.

pub mod event;
pub mod session;
pub mod technique;

pub use event::Event;
pub use session::{SessionEngine, SessionSummary};
pub use technique::{builtin_catalog, custom_technique, parse_pattern, Phase, Technique, PHASE_COUNT};
