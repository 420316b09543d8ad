//! JSON output formatting for smarttime.

use serde::Serialize;
use serde_json::json;

use crate::error::SmarttimeError;
use crate::features::calendar::{day_status, MonthView};
use crate::features::focus::FocusSession;
use crate::features::stats::PeriodReport;
use crate::features::tasks::Task;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&Task], list_name: &str) -> Result<String, SmarttimeError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, SmarttimeError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Format session history as JSON
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[FocusSession]) -> Result<String, SmarttimeError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a period report as JSON
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_report_json(report: &PeriodReport) -> Result<String, SmarttimeError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format a calendar month as JSON
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn format_calendar_json(
    view: &MonthView,
    tasks: &[Task],
    selected: chrono::NaiveDate,
) -> Result<String, SmarttimeError> {
    let days: Vec<_> = view
        .grid()
        .into_iter()
        .flatten()
        .map(|date| {
            json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "status": day_status(tasks, date)
            })
        })
        .collect();

    let due_selected: Vec<&Task> = tasks.iter().filter(|t| t.is_due_on(selected)).collect();

    let output = json!({
        "month": format!("{:04}-{:02}", view.year(), view.month()),
        "label": view.label(),
        "days": days,
        "selected": {
            "date": selected.format("%Y-%m-%d").to_string(),
            "tasks": due_selected
        }
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SmarttimeError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SmarttimeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stats::{Granularity, PeriodCursor};
    use crate::features::tasks::{DueDate, Priority};
    use chrono::NaiveDate;

    fn make_task(title: &str) -> Task {
        Task::new(title, Priority::Medium, 30, None)
    }

    #[test]
    fn test_format_tasks_json_empty_list() {
        let tasks: Vec<&Task> = vec![];
        let result = format_tasks_json(&tasks, "All").unwrap();

        assert!(result.contains("\"list\": \"All\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_tasks_json_fields() {
        let task = make_task("Buy milk");
        let result = format_tasks_json(&[&task], "All").unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"title\": \"Buy milk\""));
        assert!(result.contains("\"status\": \"TODO\""));
        assert!(result.contains("\"priority\": \"MEDIUM\""));
    }

    #[test]
    fn test_format_task_json_with_due_date() {
        let mut task = make_task("Due task");
        task.due_date = NaiveDate::from_ymd_opt(2025, 12, 15).map(DueDate::Day);
        let result = format_task_json(&task).unwrap();

        assert!(result.contains("\"due_date\": \"2025-12-15\""));
    }

    #[test]
    fn test_format_sessions_json() {
        let mut store = crate::features::focus::SessionStore::default();
        store.record(25, chrono::Utc::now(), Some(("id", "Deep work")));
        let result = format_sessions_json(store.sessions()).unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"duration_minutes\": 25"));
        assert!(result.contains("\"task_title\": \"Deep work\""));
    }

    #[test]
    fn test_format_report_json() {
        let cursor = PeriodCursor::new(
            Granularity::Weekly,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        );
        let report = PeriodReport::generate(&cursor, &[], &[]);
        let result = format_report_json(&report).unwrap();

        assert!(result.contains("\"granularity\": \"weekly\""));
        assert!(result.contains("\"completion_rate\": 0"));
        assert!(result.contains("\"buckets\""));
    }

    #[test]
    fn test_format_calendar_json() {
        let view = MonthView::parse("2025-03").unwrap();
        let selected = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let mut task = make_task("Due on the 9th");
        task.due_date = Some(DueDate::Day(selected));

        let result = format_calendar_json(&view, &[task], selected).unwrap();

        assert!(result.contains("\"month\": \"2025-03\""));
        assert!(result.contains("\"has_todo\""));
        assert!(result.contains("Due on the 9th"));
    }
}
