//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::{format_clock, format_minutes};
use crate::features::focus::{Phase, TimerMode};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Create layout: header, clock, progress, task list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Clock
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_clock(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_tasks(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the header with mode, phase, and configured durations.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = format!(
        " {} - {}  (focus {} / break {}) ",
        app.timer.mode(),
        app.timer.phase(),
        format_minutes(u64::from(app.timer.focus_minutes())),
        format_minutes(u64::from(app.timer.break_minutes())),
    );

    let color = phase_color(app.timer.phase());
    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the clock face.
fn render_clock(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let state = if app.timer.is_running() {
        "running"
    } else {
        "paused"
    };

    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            format_clock(app.timer.seconds()),
            Style::default()
                .fg(phase_color(app.timer.phase()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(clock, area);
}

/// Render countdown progress. Hidden in stopwatch mode.
fn render_progress(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    if app.timer.mode() != TimerMode::Countdown {
        return;
    }

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color(app.timer.phase())))
        .ratio(app.timer.progress().clamp(0.0, 1.0))
        .label("");

    frame.render_widget(gauge, area);
}

/// Render the open-task list the next session will be attributed to.
fn render_tasks(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let open = app.open_tasks();

    let items: Vec<ListItem<'_>> = open
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let spans = vec![
                Span::styled("[ ] ", Style::default().fg(Color::White)),
                Span::styled(
                    task.title.clone(),
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  {}", format_minutes(u64::from(task.estimated_minutes))),
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

    let title = if open.is_empty() {
        " No open tasks - session will be unattributed ".to_string()
    } else {
        format!(" Working on ({} open) ", open.len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | m:mode | b:phase | +/- [/]:durations | ?:help | q:quit");

    let style = if app.prompt.is_some() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status = Paragraph::new(status_text).style(style);

    frame.render_widget(status, area);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Focus => Color::Cyan,
        Phase::Break => Color::Green,
    }
}
