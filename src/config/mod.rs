//! Configuration management for smarttime.
//!
//! This module handles loading and saving configuration from `~/.smarttime/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    clamp_break_minutes, clamp_estimate_minutes, clamp_focus_minutes, AiConfig, Config,
    FocusConfig, BREAK_MINUTES_RANGE, ESTIMATE_MINUTES_RANGE, FOCUS_MINUTES_RANGE,
};
