//! Calendar command.

use chrono::{Local, NaiveDate};

use crate::cli::args::{CalendarArgs, OutputFormat};
use crate::error::SmarttimeError;
use crate::features::calendar::MonthView;
use crate::output::format_calendar;
use crate::storage::DataStore;

/// Execute the calendar command
///
/// # Errors
///
/// Returns an error for unparseable month/date arguments or storage failures.
pub fn calendar(
    store: &DataStore,
    args: &CalendarArgs,
    format: OutputFormat,
) -> Result<String, SmarttimeError> {
    let selected = match args.date.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            SmarttimeError::InvalidInput(format!("could not parse date '{s}' (expected YYYY-MM-DD)"))
        })?,
        None => Local::now().date_naive(),
    };

    let view = match args.month.as_deref() {
        Some(s) => MonthView::parse(s).ok_or_else(|| {
            SmarttimeError::InvalidInput(format!("could not parse month '{s}' (expected YYYY-MM)"))
        })?,
        None => MonthView::containing(selected),
    };

    let tasks = store.load_tasks()?;
    format_calendar(&view, tasks.tasks(), selected, format)
}
