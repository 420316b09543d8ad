//! Month calendar over task due dates.
//!
//! The grid is Sunday-first. Each day gets a status derived from the tasks
//! due that day.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::features::stats::aggregator::days_in_month;
use crate::features::tasks::Task;

/// Sunday-first weekday headers.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// What a calendar day holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// No tasks due
    None,
    /// At least one open task due
    HasTodo,
    /// Tasks due, all completed
    AllDone,
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    /// The month containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// Parse `YYYY-MM` input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Year of this view.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of this view (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The previous month.
    #[must_use]
    pub const fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Number of days in the month.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Sunday-first grid cells, padded with None to whole weeks.
    #[must_use]
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let first = self.first_day();
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        for day in 1..=self.day_count() {
            cells.push(NaiveDate::from_ymd_opt(self.year, self.month, day));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    /// Human label, e.g. "March 2025".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}", self.first_day().format("%B %Y"))
    }
}

/// Derive a day's status from the tasks due that day.
#[must_use]
pub fn day_status(tasks: &[Task], date: NaiveDate) -> DayStatus {
    let mut due = tasks.iter().filter(|t| t.is_due_on(date)).peekable();
    if due.peek().is_none() {
        return DayStatus::None;
    }
    if due.all(Task::is_completed) {
        DayStatus::AllDone
    } else {
        DayStatus::HasTodo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::{DueDate, Priority};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        let view = MonthView::parse("2025-03").unwrap();
        assert_eq!(view.year(), 2025);
        assert_eq!(view.month(), 3);
        assert!(MonthView::parse("2025-13").is_none());
        assert!(MonthView::parse("march").is_none());
    }

    #[test]
    fn test_prev_next_rollover() {
        let jan = MonthView::parse("2025-01").unwrap();
        assert_eq!(jan.prev(), MonthView::parse("2024-12").unwrap());
        let dec = MonthView::parse("2025-12").unwrap();
        assert_eq!(dec.next(), MonthView::parse("2026-01").unwrap());
    }

    #[test]
    fn test_grid_is_sunday_first_whole_weeks() {
        // March 2025 starts on a Saturday.
        let view = MonthView::parse("2025-03").unwrap();
        let grid = view.grid();
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.iter().take(6).filter(|c| c.is_none()).count(), 6);
        assert_eq!(grid[6], Some(date(2025, 3, 1)));
        assert_eq!(grid.iter().flatten().count(), 31);
    }

    #[test]
    fn test_day_status() {
        let day = date(2025, 3, 9);
        let mut done = Task::new("done", Priority::Low, 5, Some(DueDate::Day(day)));
        done.toggle();
        let open = Task::new("open", Priority::Low, 5, Some(DueDate::Day(day)));

        assert_eq!(day_status(&[], day), DayStatus::None);
        assert_eq!(day_status(&[done.clone()], day), DayStatus::AllDone);
        assert_eq!(day_status(&[done, open], day), DayStatus::HasTodo);
    }
}
