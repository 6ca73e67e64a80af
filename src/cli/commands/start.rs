//! Guided session on stdout.
//!
//! Drives the session engine at one tick per wall-clock second and renders
//! its events as plain lines (or JSON lines with `--output json`). The
//! engine never sleeps; all waiting happens here in the runner.

use std::io::Write;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::cli::commands::resolve_technique;
use crate::config::Config;
use crate::engine::{custom_technique, parse_pattern, Event, SessionEngine};
use crate::error::RespiraError;
use crate::output::{format_event_json, format_seconds_mmss, format_summary, render_progress_bar};

/// Execute start command
///
/// # Errors
///
/// Returns an error if the technique cannot be resolved, the pattern is
/// malformed, or output formatting fails.
pub fn start(
    config: &Config,
    technique: Option<&str>,
    pattern: Option<&str>,
    cycles: u32,
    name: &str,
    format: OutputFormat,
) -> Result<String, RespiraError> {
    let mut engine = build_engine(config, pattern, cycles, name)?;
    let index = match (pattern, technique) {
        (Some(_), _) => 0,
        (None, Some(query)) => resolve_technique(engine.catalog(), query)?,
        (None, None) => default_index(config, &engine),
    };

    let initialized = engine.select(index)?;
    render_events(&[initialized], format)?;

    let events = engine.start()?;
    render_events(&events, format)?;

    while !engine.is_complete() {
        thread::sleep(Duration::from_secs(1));
        let events = engine.tick();
        render_events(&events, format)?;
    }

    let summary = engine.summary().ok_or(RespiraError::NoTechniqueSelected)?;
    format_summary(&summary, format)
}

/// Build the engine over either the configured catalog or a one-off
/// ad-hoc technique.
fn build_engine(
    config: &Config,
    pattern: Option<&str>,
    cycles: u32,
    name: &str,
) -> Result<SessionEngine, RespiraError> {
    let Some(raw) = pattern else {
        return Ok(SessionEngine::new(config.catalog()));
    };

    let parsed = parse_pattern(raw).ok_or_else(|| {
        RespiraError::InvalidTechnique(format!(
            "unrecognized pattern '{raw}' (expected inhale-hold-exhale-pause seconds, e.g. 4-7-8-0)"
        ))
    })?;
    let technique = custom_technique(name, parsed, cycles);
    technique.validate()?;
    Ok(SessionEngine::new(vec![technique]))
}

/// Index to run when no technique was named: the configured default if it
/// resolves, otherwise the first catalog entry.
fn default_index(config: &Config, engine: &SessionEngine) -> usize {
    config
        .session
        .default_technique
        .as_deref()
        .and_then(|name| resolve_technique(engine.catalog(), name).ok())
        .unwrap_or(0)
}

/// Render a batch of engine events to stdout.
fn render_events(events: &[Event], format: OutputFormat) -> Result<(), RespiraError> {
    for event in events {
        match format {
            OutputFormat::Json => println!("{}", format_event_json(event)?),
            OutputFormat::Pretty => render_event_pretty(event),
        }
    }
    if format == OutputFormat::Pretty {
        let _ = std::io::stdout().flush();
    }
    Ok(())
}

fn render_event_pretty(event: &Event) {
    match event {
        Event::Initialized { technique, total_cycles } => {
            println!("{} · {total_cycles} cycles", technique.bold());
        }
        Event::PhaseStarted { phase, instruction, seconds } => {
            println!();
            if instruction.is_empty() {
                println!("{} ({seconds}s)", phase.display_name().bold());
            } else {
                println!("{} ({seconds}s)  {}", phase.display_name().bold(), instruction.dimmed());
            }
        }
        Event::Tick { remaining, elapsed } => {
            print!(
                "\r  {remaining:>3}s remaining  ·  {} elapsed",
                format_seconds_mmss(*elapsed)
            );
        }
        Event::CycleCompleted { cycle, percent } => {
            println!();
            println!(
                "{} Cycle {cycle} complete  {} {percent:.1}%",
                "✓".green(),
                render_progress_bar(percent / 100.0, 20)
            );
        }
        Event::SessionCompleted { .. } => {
            // The summary block printed after the run covers this.
            println!();
        }
    }
}
