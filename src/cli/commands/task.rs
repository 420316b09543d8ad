//! Task management commands.

use crate::cli::args::{AddTaskArgs, EditTaskArgs, OutputFormat, TaskCommands};
use crate::config::clamp_estimate_minutes;
use crate::error::SmarttimeError;
use crate::features::tasks::{DueDate, Priority, Task, TaskStatus};
use crate::output::{format_task, format_tasks};
use crate::storage::DataStore;

/// Execute task subcommands
///
/// # Errors
///
/// Returns an error if storage fails, an ID does not resolve, or input is
/// invalid.
pub fn task(
    store: &DataStore,
    cmd: TaskCommands,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    match cmd {
        TaskCommands::List { status } => list(store, &status, format),
        TaskCommands::Show { id } => {
            let tasks = store.load_tasks()?;
            let task = tasks.resolve(&id)?;
            format_task(task, format)
        }
        TaskCommands::Add(args) => add(store, &args, format),
        TaskCommands::Edit(args) => edit(store, &args, format),
        TaskCommands::Toggle { id } => {
            let mut tasks = store.load_tasks()?;
            let toggled = tasks.toggle(&id)?;
            let message = format!("{}: {}", toggled.status, toggled.title);
            store.save_tasks(&tasks)?;
            Ok(message)
        }
        TaskCommands::Delete { id, force } => {
            if !force {
                return Err(SmarttimeError::InvalidOperation(
                    "deleting a task is permanent; pass --force to confirm".to_string(),
                ));
            }
            let mut tasks = store.load_tasks()?;
            let removed = tasks.remove(&id)?;
            store.save_tasks(&tasks)?;
            Ok(format!("Deleted: {}", removed.title))
        }
    }
}

fn list(store: &DataStore, status: &str, format: OutputFormat) -> Result<String, SmarttimeError> {
    let tasks = store.load_tasks()?;
    let (filtered, title) = match status.to_lowercase().as_str() {
        "all" => (tasks.tasks().iter().collect(), "All Tasks"),
        "todo" | "open" => (tasks.open_tasks(), "Open Tasks"),
        "done" | "completed" => (tasks.with_status(TaskStatus::Completed), "Completed Tasks"),
        other => {
            return Err(SmarttimeError::InvalidInput(format!(
                "unknown status filter '{other}' (expected all, todo, or done)"
            )))
        }
    };
    format_tasks(&filtered, title, format)
}

fn add(store: &DataStore, args: &AddTaskArgs, format: OutputFormat) -> Result<String, SmarttimeError> {
    let priority = parse_priority(&args.priority)?;
    let due = parse_due(args.due.as_deref())?;

    let mut tasks = store.load_tasks()?;
    let task = Task::new(
        args.title.clone(),
        priority,
        clamp_estimate_minutes(args.estimate),
        due,
    );
    let created = task.clone();
    tasks.add_front(task);
    store.save_tasks(&tasks)?;

    match format {
        OutputFormat::Json => format_task(&created, format),
        OutputFormat::Pretty => Ok(format!(
            "Created task: {} (ID: {})",
            created.title,
            created.short_id()
        )),
    }
}

fn edit(store: &DataStore, args: &EditTaskArgs, format: OutputFormat) -> Result<String, SmarttimeError> {
    let priority = args.priority.as_deref().map(parse_priority).transpose()?;
    let due = parse_due(args.due.as_deref())?;
    let clear_due = args.clear_due;

    let mut tasks = store.load_tasks()?;
    let updated = tasks
        .update(&args.id, |task| {
            if let Some(title) = &args.title {
                task.title.clone_from(title);
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }
            if let Some(estimate) = args.estimate {
                task.estimated_minutes = clamp_estimate_minutes(estimate);
            }
            if clear_due {
                task.due_date = None;
            } else if due.is_some() {
                task.due_date = due;
            }
        })?
        .clone();
    store.save_tasks(&tasks)?;

    match format {
        OutputFormat::Json => format_task(&updated, format),
        OutputFormat::Pretty => Ok(format!("Updated task: {}", updated.title)),
    }
}

fn parse_priority(s: &str) -> Result<Priority, SmarttimeError> {
    Priority::parse(s).ok_or_else(|| {
        SmarttimeError::InvalidInput(format!(
            "unknown priority '{s}' (expected high, medium, or low)"
        ))
    })
}

fn parse_due(input: Option<&str>) -> Result<Option<DueDate>, SmarttimeError> {
    input
        .map(|s| {
            DueDate::parse(s).ok_or_else(|| {
                SmarttimeError::InvalidInput(format!(
                    "could not parse due date '{s}' (expected today, tomorrow, YYYY-MM-DD, or YYYY-MM-DDTHH:MM)"
                ))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, DataStore) {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        // Start from an empty list rather than the seed.
        store
            .save_tasks(&crate::features::tasks::TaskStore::default())
            .unwrap();
        (dir, store)
    }

    fn add_args(title: &str) -> AddTaskArgs {
        AddTaskArgs {
            title: title.to_string(),
            priority: "medium".to_string(),
            estimate: 30,
            due: None,
        }
    }

    #[test]
    fn test_add_and_list() {
        let (_dir, store) = store();
        add(&store, &add_args("First"), OutputFormat::Pretty).unwrap();
        add(&store, &add_args("Second"), OutputFormat::Pretty).unwrap();

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.tasks()[0].title, "Second");
    }

    #[test]
    fn test_add_clamps_estimate() {
        let (_dir, store) = store();
        let mut args = add_args("Big");
        args.estimate = 9999;
        add(&store, &args, OutputFormat::Pretty).unwrap();

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks.tasks()[0].estimated_minutes, 480);
    }

    #[test]
    fn test_add_rejects_bad_due_date() {
        let (_dir, store) = store();
        let mut args = add_args("Bad due");
        args.due = Some("next tuesday".to_string());
        let result = add(&store, &args, OutputFormat::Pretty);
        assert!(matches!(result, Err(SmarttimeError::InvalidInput(_))));
        assert!(store.load_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_and_delete_require_valid_id() {
        let (_dir, store) = store();
        let result = task(
            &store,
            TaskCommands::Toggle {
                id: "missing".to_string(),
            },
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(SmarttimeError::NotFound(_))));
    }

    #[test]
    fn test_delete_without_force_is_refused() {
        let (_dir, store) = store();
        add(&store, &add_args("Keep me"), OutputFormat::Pretty).unwrap();
        let id = store.load_tasks().unwrap().tasks()[0].id.clone();

        let result = task(
            &store,
            TaskCommands::Delete { id, force: false },
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(SmarttimeError::InvalidOperation(_))));
        assert_eq!(store.load_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_edit_updates_fields() {
        let (_dir, store) = store();
        add(&store, &add_args("Original"), OutputFormat::Pretty).unwrap();
        let id = store.load_tasks().unwrap().tasks()[0].id.clone();

        let args = EditTaskArgs {
            id,
            title: Some("Renamed".to_string()),
            priority: Some("high".to_string()),
            estimate: Some(60),
            due: Some("2025-12-01".to_string()),
            clear_due: false,
        };
        edit(&store, &args, OutputFormat::Pretty).unwrap();

        let tasks = store.load_tasks().unwrap();
        let task = &tasks.tasks()[0];
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.estimated_minutes, 60);
        assert!(task.due_date.is_some());
    }
}
