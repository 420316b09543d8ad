//! Period aggregation for the analytics dashboard.
//!
//! Buckets focus sessions into weekly, monthly, or yearly series and derives
//! the dashboard's headline numbers. All bucketing happens in local calendar
//! time; sessions are stored in UTC and converted here.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::features::focus::FocusSession;
use crate::features::tasks::Task;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Reporting granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Monday-first calendar week
    Weekly,
    /// Calendar month
    Monthly,
    /// Calendar year
    Yearly,
}

impl Granularity {
    /// Parse a granularity from string. Returns None for unrecognized input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" | "w" => Some(Self::Weekly),
            "monthly" | "month" | "m" => Some(Self::Monthly),
            "yearly" | "year" | "y" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Navigation direction through periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Earlier period
    Prev,
    /// Later period
    Next,
}

/// Inclusive period bounds in local calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    /// First instant of the period
    pub start: NaiveDateTime,
    /// Last instant of the period (millisecond precision)
    pub end: NaiveDateTime,
}

/// A reference date plus a granularity, identifying one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCursor {
    granularity: Granularity,
    reference: NaiveDate,
}

impl PeriodCursor {
    /// Create a cursor at the given reference date.
    #[must_use]
    pub const fn new(granularity: Granularity, reference: NaiveDate) -> Self {
        Self {
            granularity,
            reference,
        }
    }

    /// Create a cursor for the period containing today.
    #[must_use]
    pub fn today(granularity: Granularity) -> Self {
        Self::new(granularity, Local::now().date_naive())
    }

    /// Current granularity.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Current reference date.
    #[must_use]
    pub const fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Switch granularity, resetting the reference to today.
    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.granularity = granularity;
        self.reference = Local::now().date_naive();
    }

    /// Move one period in the given direction.
    ///
    /// Weekly shifts by 7 days, monthly by one calendar month, yearly by one
    /// calendar year, with month/year rollover handled correctly. When the
    /// target month is shorter, the day-of-month clamps to its last day
    /// (Jan 31 -> Feb 28, and a Feb 29 reference lands on Feb 28 in a
    /// non-leap year); the clamped day is kept from then on. The period a
    /// cursor identifies is unaffected, since ranges only depend on the
    /// reference's week, month, or year.
    pub fn advance(&mut self, direction: Direction) {
        let step: i32 = match direction {
            Direction::Prev => -1,
            Direction::Next => 1,
        };
        self.reference = match self.granularity {
            Granularity::Weekly => self.reference + Duration::days(7 * i64::from(step)),
            Granularity::Monthly => shift_months(self.reference, step),
            Granularity::Yearly => shift_months(self.reference, 12 * step),
        };
    }

    /// Inclusive bounds of the period containing the reference date.
    #[must_use]
    pub fn range(&self) -> PeriodRange {
        let (first, last) = match self.granularity {
            Granularity::Weekly => {
                let monday = self.monday();
                (monday, monday + Duration::days(6))
            }
            Granularity::Monthly => {
                let first = self.reference.with_day(1).unwrap_or(self.reference);
                let last_day = days_in_month(self.reference.year(), self.reference.month());
                (first, first.with_day(last_day).unwrap_or(first))
            }
            Granularity::Yearly => {
                let year = self.reference.year();
                let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(self.reference);
                let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(self.reference);
                (first, last)
            }
        };
        PeriodRange {
            start: first.and_time(NaiveTime::MIN),
            end: end_of_day(last),
        }
    }

    /// Human label for the period, e.g. "Mar 3 - Mar 9, 2025".
    #[must_use]
    pub fn label(&self) -> String {
        match self.granularity {
            Granularity::Weekly => {
                let range = self.range();
                let (start, end) = (range.start.date(), range.end.date());
                format!(
                    "{} {} - {} {}, {}",
                    MONTH_LABELS[start.month0() as usize],
                    start.day(),
                    MONTH_LABELS[end.month0() as usize],
                    end.day(),
                    end.year()
                )
            }
            Granularity::Monthly => format!("{}", self.reference.format("%B %Y")),
            Granularity::Yearly => self.reference.year().to_string(),
        }
    }

    fn monday(&self) -> NaiveDate {
        let back = i64::from(self.reference.weekday().num_days_from_monday());
        self.reference - Duration::days(back)
    }
}

/// One bar of the dashboard series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Axis label
    pub label: String,
    /// Focus minutes in the bucket
    pub minutes: u64,
}

/// A fully aggregated dashboard for one period.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    /// Granularity used
    pub granularity: Granularity,
    /// Human label for the period
    pub label: String,
    /// Bucketed series in axis order
    pub buckets: Vec<Bucket>,
    /// Focus minutes within the period
    pub period_minutes: u64,
    /// Focus minutes across all history
    pub all_time_minutes: u64,
    /// Sessions completed within the period
    pub period_sessions: usize,
    /// Rounded average minutes per session within the period, 0 when empty
    pub avg_session_minutes: u64,
    /// Completed tasks across the whole list
    pub completed_tasks: usize,
    /// All tasks across the whole list
    pub total_tasks: usize,
    /// Rounded integer percentage of completed tasks, 0 when no tasks
    pub completion_rate: u8,
}

impl PeriodReport {
    /// Aggregate sessions and tasks into a dashboard for the cursor's period.
    ///
    /// Empty inputs produce an all-zero report, never an error.
    #[must_use]
    pub fn generate(cursor: &PeriodCursor, sessions: &[FocusSession], tasks: &[Task]) -> Self {
        let range = cursor.range();
        let buckets = bucketize(cursor, sessions);

        let period_minutes = buckets.iter().map(|b| b.minutes).sum();
        let all_time_minutes = sessions
            .iter()
            .map(|s| u64::from(s.duration_minutes))
            .sum();
        let period_sessions = sessions
            .iter()
            .filter(|s| {
                let t = local_time(s);
                t >= range.start && t <= range.end
            })
            .count();
        let avg_session_minutes = if period_sessions == 0 {
            0
        } else {
            let n = period_sessions as u64;
            (period_minutes + n / 2) / n
        };

        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
        let completion_rate = completion_rate(completed_tasks, total_tasks);

        Self {
            granularity: cursor.granularity(),
            label: cursor.label(),
            buckets,
            period_minutes,
            all_time_minutes,
            period_sessions,
            avg_session_minutes,
            completed_tasks,
            total_tasks,
            completion_rate,
        }
    }
}

fn bucketize(cursor: &PeriodCursor, sessions: &[FocusSession]) -> Vec<Bucket> {
    let range = cursor.range();
    match cursor.granularity() {
        Granularity::Weekly => {
            let monday = range.start.date();
            (0..7)
                .map(|i| {
                    let day = monday + Duration::days(i);
                    Bucket {
                        label: DAY_LABELS[i as usize].to_string(),
                        minutes: minutes_on_day(sessions, day),
                    }
                })
                .collect()
        }
        Granularity::Monthly => {
            let first = range.start.date();
            let last_day = range.end.date().day();
            (1..=last_day)
                .map(|d| {
                    let day = first.with_day(d).unwrap_or(first);
                    Bucket {
                        label: d.to_string(),
                        minutes: minutes_on_day(sessions, day),
                    }
                })
                .collect()
        }
        Granularity::Yearly => {
            let year = range.start.date().year();
            (1..=12)
                .map(|m| {
                    let minutes = sessions
                        .iter()
                        .filter(|s| {
                            let d = local_time(s).date();
                            d.year() == year && d.month() == m
                        })
                        .map(|s| u64::from(s.duration_minutes))
                        .sum();
                    Bucket {
                        label: MONTH_LABELS[m as usize - 1].to_string(),
                        minutes,
                    }
                })
                .collect()
        }
    }
}

fn minutes_on_day(sessions: &[FocusSession], day: NaiveDate) -> u64 {
    sessions
        .iter()
        .filter(|s| local_time(s).date() == day)
        .map(|s| u64::from(s.duration_minutes))
        .sum()
}

fn local_time(session: &FocusSession) -> NaiveDateTime {
    session.completed_at_local().naive_local()
}

/// Rounded integer percentage, 0 when there are no tasks.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last)
}

/// Shift a date by whole calendar months, clamping the day-of-month.
fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Number of days in the given month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}
