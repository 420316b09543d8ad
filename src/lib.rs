//! smarttime - a personal productivity CLI
//!
//! Combines a to-do list, a month calendar, a Pomodoro/stopwatch focus timer,
//! an analytics dashboard, and AI-assisted goal decomposition. All state lives
//! in two JSON blobs under `~/.smarttime/`.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SmarttimeError;
pub use storage::DataStore;
