//! Breathing techniques.
//!
//! A technique is a named 4-phase pattern (inhale/hold/exhale/pause, in
//! seconds) with per-phase instruction texts and a target cycle count.
//! The built-in catalog ships three techniques; user-defined techniques
//! can be added via the config file.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RespiraError;

/// Number of phases in one breathing cycle.
pub const PHASE_COUNT: usize = 4;

/// One phase of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Breathing in.
    Inhale,
    /// Holding with lungs full.
    Hold,
    /// Breathing out.
    Exhale,
    /// Resting with lungs empty.
    Pause,
}

impl Phase {
    /// All phases in cycle order, index-aligned with technique patterns.
    pub const ALL: [Self; PHASE_COUNT] = [Self::Inhale, Self::Hold, Self::Exhale, Self::Pause];

    /// Position of this phase within the cycle.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Inhale => 0,
            Self::Hold => 1,
            Self::Exhale => 2,
            Self::Pause => 3,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
            Self::Pause => "Pause",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A breathing technique.
///
/// `pattern` and `instructions` are index-aligned; a zero duration means
/// that phase is skipped instantly and its instruction may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Seconds for inhale, hold, exhale, pause.
    pub pattern: [u32; PHASE_COUNT],
    /// Instruction text for each phase.
    pub instructions: [String; PHASE_COUNT],
    /// Total repetitions of the 4-phase pattern.
    pub cycles: u32,
    /// Estimated duration display string, not used in timing logic.
    #[serde(default)]
    pub duration_hint: String,
}

impl Technique {
    /// Check that the technique is usable for a session.
    ///
    /// # Errors
    ///
    /// Returns `RespiraError::InvalidTechnique` if the cycle count is zero.
    pub fn validate(&self) -> Result<(), RespiraError> {
        if self.cycles == 0 {
            return Err(RespiraError::InvalidTechnique(format!(
                "technique '{}' must have at least 1 cycle",
                self.name
            )));
        }
        Ok(())
    }

    /// Active seconds in one cycle (zero-duration phases contribute nothing).
    #[must_use]
    pub fn seconds_per_cycle(&self) -> u32 {
        self.pattern.iter().sum()
    }

    /// Total active seconds for the full session.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.seconds_per_cycle()) * u64::from(self.cycles)
    }

    /// Duration of the given phase in seconds.
    #[must_use]
    pub fn phase_seconds(&self, phase: Phase) -> u32 {
        self.pattern[phase.index()]
    }

    /// Instruction text for the given phase.
    #[must_use]
    pub fn instruction(&self, phase: Phase) -> &str {
        &self.instructions[phase.index()]
    }

    /// Pattern as a display string, e.g. "4-7-8-0".
    #[must_use]
    pub fn pattern_display(&self) -> String {
        self.pattern
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// The built-in technique catalog.
#[must_use]
pub fn builtin_catalog() -> Vec<Technique> {
    vec![
        Technique {
            name: "Vagal Awakening".to_string(),
            description: "Slow 4-7-8 breathing to settle the nervous system".to_string(),
            pattern: [4, 7, 8, 0],
            instructions: [
                "Breathe in slowly through the nose".to_string(),
                "Hold, letting the breath settle".to_string(),
                "Release in one long, steady exhale".to_string(),
                String::new(),
            ],
            cycles: 4,
            duration_hint: "3-4 minutes".to_string(),
        },
        Technique {
            name: "Four Directions".to_string(),
            description: "Box breathing with even counts on every side".to_string(),
            pattern: [4, 4, 4, 4],
            instructions: [
                "Breathe in for four counts".to_string(),
                "Hold with lungs full".to_string(),
                "Breathe out for four counts".to_string(),
                "Rest with lungs empty".to_string(),
            ],
            cycles: 8,
            duration_hint: "5-6 minutes".to_string(),
        },
        Technique {
            name: "Breathing Matrix".to_string(),
            description: "Extended-exhale pattern for deep relaxation".to_string(),
            pattern: [6, 2, 7, 2],
            instructions: [
                "Breathe in deep and full".to_string(),
                "Hold briefly at the top".to_string(),
                "Let the exhale stretch out".to_string(),
                "Pause in the stillness".to_string(),
            ],
            cycles: 6,
            duration_hint: "4-5 minutes".to_string(),
        },
    ]
}

static PATTERN_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^\s*(\d{1,3})[-/ ](\d{1,3})[-/ ](\d{1,3})[-/ ](\d{1,3})\s*$").unwrap();
    re
});

/// Parse a pattern string like "4-7-8-0" (also accepts "/" or space
/// separators) into phase durations.
#[must_use]
pub fn parse_pattern(s: &str) -> Option<[u32; PHASE_COUNT]> {
    let caps = PATTERN_RE.captures(s)?;
    let mut pattern = [0u32; PHASE_COUNT];
    for (slot, cap) in pattern.iter_mut().zip(caps.iter().skip(1)) {
        *slot = cap?.as_str().parse().ok()?;
    }
    Some(pattern)
}

/// Build an ad-hoc technique from a parsed pattern.
#[must_use]
pub fn custom_technique(name: &str, pattern: [u32; PHASE_COUNT], cycles: u32) -> Technique {
    Technique {
        name: name.to_string(),
        description: "Custom breathing pattern".to_string(),
        pattern,
        instructions: [
            "Breathe in".to_string(),
            "Hold".to_string(),
            "Breathe out".to_string(),
            "Rest".to_string(),
        ],
        cycles,
        duration_hint: String::new(),
    }
}
