//! Core utilities shared across features.

mod datetime;

pub use datetime::{format_clock, format_hours, format_minutes};
