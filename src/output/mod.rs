//! Output formatting for smarttime.
//!
//! Every command renders through here, honoring the global `--output` flag.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::SmarttimeError;
use crate::features::calendar::MonthView;
use crate::features::focus::FocusSession;
use crate::features::stats::PeriodReport;
use crate::features::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[&Task],
    title: &str,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, SmarttimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format session history based on output format
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[FocusSession],
    limit: usize,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, limit)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}

/// Format a period report based on output format
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_report(report: &PeriodReport, format: OutputFormat) -> Result<String, SmarttimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => format_report_json(report),
    }
}

/// Format a calendar month based on output format
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_calendar(
    view: &MonthView,
    tasks: &[Task],
    selected: NaiveDate,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_calendar_pretty(view, tasks, selected)),
        OutputFormat::Json => format_calendar_json(view, tasks, selected),
    }
}
