//! Focus timer command.

use crate::cli::args::{FocusCommands, OutputFormat};
use crate::config::Config;
use crate::error::SmarttimeError;
use crate::output::format_sessions;
use crate::storage::DataStore;

/// Execute the focus command
///
/// Without a subcommand, opens the interactive timer UI. `history` lists
/// recorded sessions.
///
/// # Errors
///
/// Returns an error if storage or the terminal UI fails.
pub fn focus(
    store: &DataStore,
    config: &Config,
    cmd: Option<FocusCommands>,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    match cmd {
        None => {
            crate::tui::run(store, config)?;
            Ok(String::new())
        }
        Some(FocusCommands::History { limit }) => {
            let sessions = store.load_sessions()?;
            format_sessions(sessions.sessions(), limit, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_history_on_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());

        let output = focus(
            &store,
            &Config::default(),
            Some(FocusCommands::History { limit: 20 }),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("No focus sessions"));
    }

    #[test]
    fn test_history_lists_sessions() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        let mut sessions = crate::features::focus::SessionStore::default();
        sessions.record(25, Utc::now(), Some(("id", "Deep work")));
        store.save_sessions(&sessions).unwrap();

        let output = focus(
            &store,
            &Config::default(),
            Some(FocusCommands::History { limit: 20 }),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("Deep work"));
    }
}
