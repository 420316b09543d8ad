//! Pretty terminal output formatting for smarttime.

use chrono::{Datelike, NaiveDate};
use colored::Colorize;

use crate::core::{format_hours, format_minutes};
use crate::features::calendar::{day_status, DayStatus, MonthView, WEEKDAY_HEADERS};
use crate::features::focus::FocusSession;
use crate::features::stats::visualization::{
    render_bar_chart, render_progress_bar, render_sparkline, render_summary_box,
};
use crate::features::stats::{Granularity, PeriodReport};
use crate::features::tasks::{Priority, Task, TaskStatus};

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[&Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let open = tasks.iter().filter(|t| t.is_open()).count();
    let mut output = format!("{} ({} items, {} open)\n", title, tasks.len(), open);
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&format_task_line(task));
        output.push('\n');
    }

    output
}

fn format_task_line(task: &Task) -> String {
    let status_icon = match task.status {
        TaskStatus::Todo => "[ ]".white(),
        TaskStatus::Completed => "[x]".green(),
    };

    let title = if task.is_completed() {
        task.title.strikethrough().dimmed().to_string()
    } else {
        task.title.bold().to_string()
    };

    let priority = match task.priority {
        Priority::High => task.priority.display_name().red(),
        Priority::Medium => task.priority.display_name().yellow(),
        Priority::Low => task.priority.display_name().green(),
    };

    let mut line = format!(
        "{} {}  {}  {}",
        status_icon,
        title,
        priority,
        format_minutes(u64::from(task.estimated_minutes)).dimmed()
    );

    if let Some(due) = &task.due_date {
        let due_str = format!("due {due}");
        if task.is_overdue() {
            line.push_str(&format!("  {}", due_str.red()));
        } else {
            line.push_str(&format!("  {}", due_str.yellow()));
        }
    }

    line.push_str(&format!("  {}", task.short_id().dimmed()));
    line
}

/// Format a single task with all fields
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = format_task_line(task);
    output.push('\n');
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), task.status));
    output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), task.priority));
    output.push_str(&format!(
        "  {}: {}\n",
        "Estimate".dimmed(),
        format_minutes(u64::from(task.estimated_minutes))
    ));
    if let Some(due) = &task.due_date {
        output.push_str(&format!("  {}: {}\n", "Due".dimmed(), due));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        task.created_at.format("%Y-%m-%d %H:%M")
    ));
    output
}

/// Format session history, most recent first
pub fn format_sessions_pretty(sessions: &[FocusSession], limit: usize) -> String {
    if sessions.is_empty() {
        return "No focus sessions recorded yet".to_string();
    }

    let total = format_minutes(
        sessions
            .iter()
            .map(|s| u64::from(s.duration_minutes))
            .sum(),
    );
    let mut output = format!(
        "Focus history ({} sessions, {} total)\n",
        sessions.len(),
        total
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions.iter().rev().take(limit) {
        let when = session.completed_at_local().format("%Y-%m-%d %H:%M");
        let duration = format_minutes(u64::from(session.duration_minutes));
        output.push_str(&format!(
            "{}  {:>7}  {}\n",
            when.to_string().dimmed(),
            duration.cyan(),
            session.display_title()
        ));
    }

    output
}

/// Format an aggregated period report as a dashboard
pub fn format_report_pretty(report: &PeriodReport) -> String {
    let mut output = format!(
        "{} focus - {}\n\n",
        report.granularity.to_string().bold(),
        report.label
    );

    let label_width = match report.granularity {
        Granularity::Weekly | Granularity::Yearly => 3,
        Granularity::Monthly => 2,
    };
    let data: Vec<(String, u64)> = report
        .buckets
        .iter()
        .map(|b| (b.label.clone(), b.minutes))
        .collect();
    output.push_str(&render_bar_chart(&data, label_width, 30));
    output.push('\n');

    let values: Vec<u64> = report.buckets.iter().map(|b| b.minutes).collect();
    output.push_str(&format!("\nTrend: {}\n\n", render_sparkline(&values)));

    let items = [
        ("This period", format_minutes(report.period_minutes)),
        ("All time", format_hours(report.all_time_minutes)),
        ("Sessions", report.period_sessions.to_string()),
        ("Avg session", format_minutes(report.avg_session_minutes)),
        (
            "Tasks done",
            format!("{}/{}", report.completed_tasks, report.total_tasks),
        ),
    ];
    output.push_str(&render_summary_box("Summary", &items));

    output.push_str(&format!(
        "\nCompletion: {}\n",
        render_progress_bar(report.completed_tasks, report.total_tasks, 20)
    ));

    output
}

/// Format a month calendar grid with per-day task markers
pub fn format_calendar_pretty(view: &MonthView, tasks: &[Task], selected: NaiveDate) -> String {
    let mut output = format!("{}\n", view.label().bold());

    let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|d| format!("{d:>3}")).collect();
    output.push_str(&header.join(" "));
    output.push('\n');

    for week in view.grid().chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                cell.map_or_else(
                    || "   ".to_string(),
                    |date| {
                        let day = format!("{:>3}", date.day());
                        let day = match day_status(tasks, date) {
                            DayStatus::None => day.normal(),
                            DayStatus::HasTodo => day.yellow(),
                            DayStatus::AllDone => day.green(),
                        };
                        if date == selected {
                            day.reversed().to_string()
                        } else {
                            day.to_string()
                        }
                    },
                )
            })
            .collect();
        output.push_str(&row.join(" "));
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} {}  {} {}\n",
        "●".yellow(),
        "open tasks due".dimmed(),
        "●".green(),
        "all done".dimmed()
    ));

    let due: Vec<&Task> = tasks.iter().filter(|t| t.is_due_on(selected)).collect();
    output.push('\n');
    if due.is_empty() {
        output.push_str(&format!("No tasks due on {selected}"));
    } else {
        output.push_str(&format_tasks_pretty(&due, &format!("Due {selected}")));
    }

    output
}
