//! Path resolution for smarttime configuration and data files.
//!
//! All smarttime data is stored in `~/.smarttime/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - Persisted task list
//! - `sessions.json` - Persisted focus session history
//!
//! The `SMARTTIME_DIR` environment variable overrides the root (used by the
//! integration tests).

use std::path::PathBuf;

use crate::error::SmarttimeError;

/// Paths to smarttime configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.smarttime/`
    pub root: PathBuf,
    /// Config file: `~/.smarttime/config.yaml`
    pub config_file: PathBuf,
    /// Task blob: `~/.smarttime/tasks.json`
    pub tasks_file: PathBuf,
    /// Session blob: `~/.smarttime/sessions.json`
    pub sessions_file: PathBuf,
}

impl Paths {
    /// Create paths from `SMARTTIME_DIR` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `SMARTTIME_DIR` nor `HOME` is set.
    pub fn new() -> Result<Self, SmarttimeError> {
        if let Ok(dir) = std::env::var("SMARTTIME_DIR") {
            return Ok(Self::with_root(PathBuf::from(dir)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            SmarttimeError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".smarttime")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_file: root.join("tasks.json"),
            sessions_file: root.join("sessions.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SmarttimeError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                SmarttimeError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".smarttime"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-smarttime");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.tasks_file, root.join("tasks.json"));
        assert_eq!(paths.sessions_file, root.join("sessions.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
