//! In-memory task collection.
//!
//! New tasks go to the front of the list. Lookups accept a full ID or a
//! unique prefix so short IDs can be used on the command line.

use chrono::NaiveDate;

use super::task::{DueDate, Priority, Task, TaskStatus};
use crate::error::SmarttimeError;

/// An ordered collection of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a store from existing tasks, preserving their order.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Sample tasks shown the first time the app runs.
    #[must_use]
    pub fn seed() -> Self {
        let today = Some(DueDate::Day(chrono::Local::now().date_naive()));
        Self {
            tasks: vec![
                Task::new("Try the AI goal breakdown", Priority::High, 5, today),
                Task::new(
                    "Finish your first focus session",
                    Priority::Medium,
                    25,
                    today,
                ),
            ],
        }
    }

    /// All tasks in list order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consume the store, returning the task list.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task at the front of the list.
    pub fn add_front(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Add several tasks at the front, keeping their given order.
    pub fn add_front_all(&mut self, tasks: Vec<Task>) {
        for task in tasks.into_iter().rev() {
            self.tasks.insert(0, task);
        }
    }

    /// Resolve a full ID or unique prefix to a task.
    ///
    /// # Errors
    /// `NotFound` when nothing matches, `InvalidInput` when a prefix is
    /// ambiguous.
    pub fn resolve(&self, id: &str) -> Result<&Task, SmarttimeError> {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            return Ok(task);
        }

        let mut matches = self.tasks.iter().filter(|t| t.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task),
            (Some(_), Some(_)) => Err(SmarttimeError::InvalidInput(format!(
                "task id '{id}' is ambiguous"
            ))),
            _ => Err(SmarttimeError::NotFound(format!("task '{id}'"))),
        }
    }

    /// Apply an edit to the task matching `id`.
    ///
    /// # Errors
    /// Same resolution errors as [`Self::resolve`].
    pub fn update<F>(&mut self, id: &str, f: F) -> Result<&Task, SmarttimeError>
    where
        F: FnOnce(&mut Task),
    {
        let full_id = self.resolve(id)?.id.clone();
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == full_id)
            .ok_or_else(|| SmarttimeError::NotFound(format!("task '{id}'")))?;
        f(task);
        Ok(task)
    }

    /// Toggle completion status, returning the updated task.
    ///
    /// # Errors
    /// Same resolution errors as [`Self::resolve`].
    pub fn toggle(&mut self, id: &str) -> Result<&Task, SmarttimeError> {
        self.update(id, Task::toggle)
    }

    /// Remove and return the task matching `id`. Never touches sessions.
    ///
    /// # Errors
    /// Same resolution errors as [`Self::resolve`].
    pub fn remove(&mut self, id: &str) -> Result<Task, SmarttimeError> {
        let full_id = self.resolve(id)?.id.clone();
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == full_id)
            .ok_or_else(|| SmarttimeError::NotFound(format!("task '{id}'")))?;
        Ok(self.tasks.remove(pos))
    }

    /// Tasks with the given status, in list order.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Open tasks, in list order.
    #[must_use]
    pub fn open_tasks(&self) -> Vec<&Task> {
        self.with_status(TaskStatus::Todo)
    }

    /// Tasks due on the given calendar day.
    #[must_use]
    pub fn due_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_due_on(date)).collect()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }
}
