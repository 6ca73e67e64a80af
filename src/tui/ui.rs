//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::engine::Phase;
use crate::output::format_seconds_mmss;
use crate::tui::app::{App, Screen};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.screen {
        Screen::Techniques => render_techniques(frame, app, chunks[1]),
        Screen::Breathing => render_breathing(frame, app, chunks[1]),
        Screen::Complete => render_complete(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Techniques => {
            format!(" respira ({} techniques) ", app.engine.catalog().len())
        }
        Screen::Breathing => {
            let name = app
                .engine
                .selected()
                .map_or("respira", |t| t.name.as_str());
            format!(
                " {} · cycle {}/{} ",
                name,
                app.engine.completed_cycles(),
                app.engine.total_cycles()
            )
        }
        Screen::Complete => " Session complete ".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the technique selection list.
fn render_techniques(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .engine
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, technique)| {
            let is_selected = i == app.selected;

            let spans = vec![
                Span::styled(
                    &technique.name,
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  {}", technique.pattern_display()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("  ×{}", technique.cycles),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", technique.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the active breathing session.
fn render_breathing(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Phase display
            Constraint::Length(3), // Progress gauge
        ])
        .split(area);

    let engine = &app.engine;
    let mut lines: Vec<Line<'_>> = vec![Line::from("")];

    if engine.started_at().is_none() {
        lines.push(Line::from(Span::styled(
            "Ready",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Space to begin",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let phase = engine.current_phase();
        let mut phase_label = phase.display_name().to_string();
        if !engine.is_playing() {
            phase_label.push_str("  (paused)");
        }
        lines.push(Line::from(Span::styled(
            phase_label,
            Style::default()
                .fg(phase_color(phase))
                .add_modifier(Modifier::BOLD),
        )));

        if let Some(instruction) = engine.current_instruction() {
            if !instruction.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(instruction.to_string()));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{}s", engine.phase_remaining()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("elapsed {}", format_seconds_mmss(engine.elapsed_seconds())),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let phase_block = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );
    frame.render_widget(phase_block, chunks[0]);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (engine.progress() * 100.0).round() as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!(
            "{}/{} cycles",
            engine.completed_cycles(),
            engine.total_cycles()
        ));
    frame.render_widget(gauge, chunks[1]);
}

/// Render the completion statistics.
fn render_complete(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines: Vec<Line<'_>> = vec![Line::from("")];

    if let Some(summary) = &app.summary {
        lines.push(Line::from(Span::styled(
            "Well done",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Technique: {}", summary.technique)));
        lines.push(Line::from(format!(
            "Cycles completed: {} of {}",
            summary.completed_cycles, summary.total_cycles
        )));
        lines.push(Line::from(format!(
            "Breathing time: {}",
            format_seconds_mmss(summary.elapsed_seconds)
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press n for a new session",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(block, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let default_hint = match app.screen {
        Screen::Techniques => "j/k:nav | Enter:select | q:quit",
        Screen::Breathing => "Space:start/pause | r:reset | t:techniques | q:quit",
        Screen::Complete => "n:new session | q:quit",
    };
    let status_text = app.status.as_deref().unwrap_or(default_hint);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Accent color for each phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Inhale => Color::Cyan,
        Phase::Hold => Color::Yellow,
        Phase::Exhale => Color::Green,
        Phase::Pause => Color::DarkGray,
    }
}
