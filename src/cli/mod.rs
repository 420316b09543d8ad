//! Command-line interface for smarttime.

pub mod args;
pub mod commands;
