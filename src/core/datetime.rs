//! Time formatting helpers.

/// Format whole seconds as a clock string: `MM:SS`, or `H:MM:SS` at an hour
/// and above.
#[must_use]
pub fn format_clock(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Format minutes as a short duration string (e.g. "25m", "1h 30m").
#[must_use]
pub fn format_minutes(total_minutes: u64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Format minutes as decimal hours with one fractional digit (e.g. "2.5h").
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_hours(total_minutes: u64) -> String {
    format!("{:.1}h", total_minutes as f64 / 60.0)
}
