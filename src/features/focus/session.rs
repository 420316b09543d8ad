//! Focus session records.
//!
//! A session is an immutable receipt for completed focus time. The task
//! reference is weak: `task_title` is a snapshot taken at recording time, so
//! history survives task deletion.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed block of focus time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    /// Unique ID
    pub id: String,
    /// Whole minutes of focus credited
    pub duration_minutes: u32,
    /// When the session finished
    pub completed_at: DateTime<Utc>,
    /// ID of the associated task, if any (may dangle after deletion)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Task title snapshot at recording time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl FocusSession {
    /// Completion time in the local timezone.
    #[must_use]
    pub fn completed_at_local(&self) -> DateTime<Local> {
        self.completed_at.with_timezone(&Local)
    }

    /// Title to display, falling back when no task was attached.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.task_title.as_deref().unwrap_or("no associated task")
    }
}

/// Append-only, insertion-ordered session history.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<FocusSession>,
}

impl SessionStore {
    /// Create a store from existing sessions, preserving their order.
    #[must_use]
    pub const fn new(sessions: Vec<FocusSession>) -> Self {
        Self { sessions }
    }

    /// All sessions in insertion order.
    #[must_use]
    pub fn sessions(&self) -> &[FocusSession] {
        &self.sessions
    }

    /// Consume the store, returning the session list.
    #[must_use]
    pub fn into_sessions(self) -> Vec<FocusSession> {
        self.sessions
    }

    /// Number of recorded sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check whether any sessions exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Build a session with a fresh ID and append it.
    ///
    /// `task` is an optional `(id, title)` pair; the title is copied as a
    /// snapshot. No deduplication, no cap, no other side effects.
    pub fn record(
        &mut self,
        duration_minutes: u32,
        completed_at: DateTime<Utc>,
        task: Option<(&str, &str)>,
    ) -> &FocusSession {
        let session = FocusSession {
            id: Uuid::new_v4().to_string(),
            duration_minutes,
            completed_at,
            task_id: task.map(|(id, _)| id.to_string()),
            task_title: task.map(|(_, title)| title.to_string()),
        };
        self.sessions.push(session);
        // Just pushed, the list is non-empty.
        &self.sessions[self.sessions.len() - 1]
    }

    /// Total focus minutes across all recorded sessions.
    #[must_use]
    pub fn total_minutes(&self) -> u64 {
        self.sessions
            .iter()
            .map(|s| u64::from(s.duration_minutes))
            .sum()
    }
}
