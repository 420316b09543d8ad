//! Analytics dashboard command.

use crate::cli::args::{OutputFormat, StatsArgs};
use crate::error::SmarttimeError;
use crate::features::stats::{Direction, Granularity, PeriodCursor, PeriodReport};
use crate::output::format_report;
use crate::storage::DataStore;

/// Execute the stats command
///
/// # Errors
///
/// Returns an error for an unknown view name or storage failures.
pub fn stats(
    store: &DataStore,
    args: &StatsArgs,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    let granularity = Granularity::parse(&args.view).ok_or_else(|| {
        SmarttimeError::InvalidInput(format!(
            "unknown view '{}' (expected weekly, monthly, or yearly)",
            args.view
        ))
    })?;

    let mut cursor = PeriodCursor::today(granularity);
    let direction = if args.offset < 0 {
        Direction::Prev
    } else {
        Direction::Next
    };
    for _ in 0..args.offset.unsigned_abs() {
        cursor.advance(direction);
    }

    let tasks = store.load_tasks()?;
    let sessions = store.load_sessions()?;
    let report = PeriodReport::generate(&cursor, sessions.sessions(), tasks.tasks());
    format_report(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stats_on_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());

        let args = StatsArgs {
            view: "weekly".to_string(),
            offset: 0,
        };
        let output = stats(&store, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Weekly"));
    }

    #[test]
    fn test_stats_rejects_unknown_view() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());

        let args = StatsArgs {
            view: "daily".to_string(),
            offset: 0,
        };
        assert!(matches!(
            stats(&store, &args, OutputFormat::Pretty),
            Err(SmarttimeError::InvalidInput(_))
        ));
    }
}
