//! JSON blob persistence.
//!
//! Two blobs under the data root: `tasks.json` and `sessions.json`. Loading
//! tasks with no prior data seeds the sample list; sessions start empty.
//! Every mutation is followed by a full save, which rewrites the blob.

use std::path::{Path, PathBuf};

use crate::config::Paths;
use crate::error::SmarttimeError;
use crate::features::focus::{FocusSession, SessionStore};
use crate::features::tasks::{Task, TaskStore};

/// Filesystem-backed store for the task and session collections.
pub struct DataStore {
    tasks_file: PathBuf,
    sessions_file: PathBuf,
}

impl DataStore {
    /// Open the default store, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open() -> Result<Self, SmarttimeError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;

        Ok(Self {
            tasks_file: paths.tasks_file,
            sessions_file: paths.sessions_file,
        })
    }

    /// Create a store rooted at a custom directory (for testing).
    #[must_use]
    pub fn with_dir(dir: &Path) -> Self {
        let paths = Paths::with_root(dir.to_path_buf());
        Self {
            tasks_file: paths.tasks_file,
            sessions_file: paths.sessions_file,
        }
    }

    /// Load the task list, seeding sample tasks on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read or parsed.
    pub fn load_tasks(&self) -> Result<TaskStore, SmarttimeError> {
        if !self.tasks_file.exists() {
            return Ok(TaskStore::seed());
        }

        let content = std::fs::read_to_string(&self.tasks_file).map_err(SmarttimeError::Io)?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(TaskStore::new(tasks))
    }

    /// Write the full task list.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be serialized or written.
    pub fn save_tasks(&self, store: &TaskStore) -> Result<(), SmarttimeError> {
        let content = serde_json::to_string_pretty(store.tasks())?;
        std::fs::write(&self.tasks_file, content).map_err(SmarttimeError::Io)?;
        Ok(())
    }

    /// Load the session history, empty on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read or parsed.
    pub fn load_sessions(&self) -> Result<SessionStore, SmarttimeError> {
        if !self.sessions_file.exists() {
            return Ok(SessionStore::default());
        }

        let content = std::fs::read_to_string(&self.sessions_file).map_err(SmarttimeError::Io)?;
        let sessions: Vec<FocusSession> = serde_json::from_str(&content)?;
        Ok(SessionStore::new(sessions))
    }

    /// Write the full session history.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be serialized or written.
    pub fn save_sessions(&self, store: &SessionStore) -> Result<(), SmarttimeError> {
        let content = serde_json::to_string_pretty(store.sessions())?;
        std::fs::write(&self.sessions_file, content).map_err(SmarttimeError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::Priority;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_seeds_tasks_and_empty_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path());

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks.len(), 2);

        let sessions = store.load_sessions().unwrap();
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_save_and_reload_tasks() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path());

        let mut tasks = TaskStore::default();
        tasks.add_front(Task::new("Persisted", Priority::High, 20, None));
        store.save_tasks(&tasks).unwrap();

        let loaded = store.load_tasks().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.tasks()[0].title, "Persisted");
    }

    #[test]
    fn test_saved_empty_list_is_not_reseeded() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path());

        store.save_tasks(&TaskStore::default()).unwrap();

        let loaded = store.load_tasks().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_and_reload_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path());

        let mut sessions = SessionStore::default();
        sessions.record(25, Utc::now(), Some(("id-1", "Deep work")));
        store.save_sessions(&sessions).unwrap();

        let loaded = store.load_sessions().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.sessions()[0].task_title.as_deref(), Some("Deep work"));
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path());

        std::fs::write(temp_dir.path().join("tasks.json"), "not json").unwrap();
        assert!(matches!(
            store.load_tasks(),
            Err(SmarttimeError::Parse(_))
        ));
    }
}
