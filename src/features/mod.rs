//! Feature modules for smarttime.

pub mod breakdown;
pub mod calendar;
pub mod focus;
pub mod stats;
pub mod tasks;
