//! Command implementations for smarttime.
//!
//! This module contains the implementation of all CLI commands. Each command
//! returns its rendered output as a string; main prints it.

mod breakdown;
mod calendar;
mod completions;
mod focus;
mod stats;
mod task;

pub use breakdown::breakdown;
pub use calendar::calendar;
pub use completions::completions;
pub use focus::focus;
pub use stats::stats;
pub use task::task;
