//! Month calendar over task due dates.

pub mod month;

pub use month::{day_status, DayStatus, MonthView, WEEKDAY_HEADERS};
