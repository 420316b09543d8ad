//! Task model.
//!
//! Tasks are identified by UUID, carry a priority and a time estimate, and
//! optionally a due date (whole day or specific moment).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// Not yet done
    Todo,
    /// Done
    Completed,
}

impl TaskStatus {
    /// Get the opposite status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Todo => Self::Completed,
            Self::Completed => Self::Todo,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Urgent/important
    High,
    /// Normal
    Medium,
    /// Can wait
    Low,
}

impl Priority {
    /// Parse a priority from string. Returns None for unrecognized input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" | "h" => Some(Self::High),
            "medium" | "med" | "m" => Some(Self::Medium),
            "low" | "l" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A due date: either a whole day or a specific moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DueDate {
    /// A whole calendar day
    Day(NaiveDate),
    /// A specific date and time
    Moment(NaiveDateTime),
}

impl DueDate {
    /// Parse a due date from user input.
    ///
    /// Accepts `today`, `tomorrow`, `YYYY-MM-DD`, and `YYYY-MM-DDTHH:MM`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "today" => return Some(Self::Day(Local::now().date_naive())),
            "tomorrow" => {
                return Local::now().date_naive().succ_opt().map(Self::Day);
            }
            _ => {}
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Some(Self::Moment(dt));
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self::Day(d));
        }
        None
    }

    /// Get the calendar day of this due date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Day(d) => *d,
            Self::Moment(dt) => dt.date(),
        }
    }

    /// Get the time component, if one was given.
    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Day(_) => None,
            Self::Moment(dt) => Some(dt.time()),
        }
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Moment(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// A to-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, immutable once assigned
    pub id: String,
    /// Task title
    pub title: String,
    /// Completion status
    pub status: TaskStatus,
    /// Priority level
    pub priority: Priority,
    /// Estimated effort in minutes
    pub estimated_minutes: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
}

impl Task {
    /// Create a new open task with a fresh ID.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        estimated_minutes: u32,
        due_date: Option<DueDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            status: TaskStatus::Todo,
            priority,
            estimated_minutes,
            created_at: Utc::now(),
            due_date,
        }
    }

    /// Check if the task is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Todo
    }

    /// Check if the task is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Flip completion status.
    pub fn toggle(&mut self) {
        self.status = self.status.toggled();
    }

    /// Check if the task is due on the given calendar day.
    #[must_use]
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date.is_some_and(|d| d.date() == date)
    }

    /// Check if the task is open and past its due day.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.is_open()
            && self
                .due_date
                .is_some_and(|d| d.date() < Local::now().date_naive())
    }

    /// Short ID prefix for display.
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(8)]
    }
}
