//! AI goal decomposition command.

use crate::cli::args::OutputFormat;
use crate::error::SmarttimeError;
use crate::features::breakdown::GoalPlanner;
use crate::features::tasks::{DueDate, Task};
use crate::output::format_tasks;
use crate::storage::DataStore;

/// Execute the breakdown command
///
/// Asks the planner for subtasks and inserts them at the front of the task
/// list, in the order the planner returned them. Each subtask gets the
/// command's due date and its own estimate. If the planner fails, nothing is
/// created.
///
/// # Errors
///
/// Returns `ServiceUnavailable` when the planner fails, `InvalidInput` for a
/// bad due date, or a storage error.
pub fn breakdown(
    store: &DataStore,
    planner: &dyn GoalPlanner,
    goal: &str,
    due: Option<&str>,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    let due = due
        .map(|s| {
            DueDate::parse(s).ok_or_else(|| {
                SmarttimeError::InvalidInput(format!("could not parse due date '{s}'"))
            })
        })
        .transpose()?;

    let proposed = planner.break_down_goal(goal)?;

    let mut tasks = store.load_tasks()?;
    let new_tasks: Vec<Task> = proposed
        .into_iter()
        .map(|p| Task::new(p.title, p.priority, p.estimated_minutes.max(1), due))
        .collect();
    let created: Vec<Task> = new_tasks.clone();
    tasks.add_front_all(new_tasks);
    store.save_tasks(&tasks)?;

    let refs: Vec<&Task> = created.iter().collect();
    format_tasks(&refs, &format!("Subtasks for \"{goal}\""), format)
}
