use colored::Colorize;

use crate::engine::{Phase, SessionSummary, Technique};

/// Format the technique catalog as a pretty list
#[must_use]
pub fn format_techniques_pretty(techniques: &[Technique]) -> String {
    if techniques.is_empty() {
        return "Techniques (0 items)\n  No techniques configured".to_string();
    }

    let mut output = format!("Techniques ({} items)\n", techniques.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (i, technique) in techniques.iter().enumerate() {
        let mut line = format!("{:>2}. {}", i + 1, technique.name.bold());
        line.push_str(&format!("  {}", technique.pattern_display().cyan()));
        line.push_str(&format!("  ×{}", technique.cycles));
        if !technique.duration_hint.is_empty() {
            line.push_str(&format!("  {}", technique.duration_hint.dimmed()));
        }
        output.push_str(&line);
        output.push('\n');
        output.push_str(&format!("    {}\n", technique.description.dimmed()));
    }

    output
}

/// Format a single technique as pretty output
#[must_use]
pub fn format_technique_pretty(technique: &Technique) -> String {
    let mut output = format!("{}\n", technique.name.bold());
    output.push_str(&format!("  {}\n", technique.description));
    output.push_str(&format!(
        "  {}: {}\n",
        "Pattern".dimmed(),
        technique.pattern_display()
    ));
    output.push_str(&format!("  {}: {}\n", "Cycles".dimmed(), technique.cycles));
    output.push_str(&format!(
        "  {}: {} active\n",
        "Total".dimmed(),
        format_seconds_mmss(technique.total_seconds())
    ));
    if !technique.duration_hint.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Duration".dimmed(),
            technique.duration_hint
        ));
    }

    output.push('\n');
    for phase in Phase::ALL {
        let seconds = technique.phase_seconds(phase);
        if seconds == 0 {
            continue;
        }
        output.push_str(&format!(
            "  {:<7} {:>3}s  {}\n",
            phase.display_name(),
            seconds,
            technique.instruction(phase).dimmed()
        ));
    }

    output
}

/// Format a session summary as pretty output
#[must_use]
pub fn format_summary_pretty(summary: &SessionSummary) -> String {
    let mut output = format!("{} Session complete!\n", "✓".green().bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("  {}: {}\n", "Technique".dimmed(), summary.technique));
    output.push_str(&format!(
        "  {}: {} of {}\n",
        "Cycles".dimmed(),
        summary.completed_cycles,
        summary.total_cycles
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Breathing time".dimmed(),
        format_seconds_mmss(summary.elapsed_seconds)
    ));
    if let Some(started_at) = summary.started_at {
        output.push_str(&format!(
            "  {}: {}\n",
            "Started".dimmed(),
            started_at.format("%H:%M:%S")
        ));
    }
    output
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_seconds_mmss(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
