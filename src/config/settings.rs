//! Configuration settings for smarttime.
//!
//! Settings are loaded from `~/.smarttime/config.yaml`. Timer durations are
//! clamped here, at the boundary; the timer engine trusts its inputs.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::SmarttimeError;
use crate::features::breakdown::DEFAULT_MODEL;

/// Focus duration bounds in minutes.
pub const FOCUS_MINUTES_RANGE: (u32, u32) = (1, 120);
/// Break duration bounds in minutes.
pub const BREAK_MINUTES_RANGE: (u32, u32) = (1, 30);
/// Task estimate bounds in minutes.
pub const ESTIMATE_MINUTES_RANGE: (u32, u32) = (1, 480);

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Focus timer settings.
    pub focus: FocusConfig,
    /// AI planner settings.
    pub ai: AiConfig,
}

/// Focus timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Focus phase duration in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break phase duration in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Ring the terminal bell on completion.
    #[serde(default = "default_true")]
    pub sound: bool,
}

impl FocusConfig {
    /// Focus duration clamped to the allowed range.
    #[must_use]
    pub fn clamped_focus_minutes(&self) -> u32 {
        clamp_focus_minutes(self.focus_minutes)
    }

    /// Break duration clamped to the allowed range.
    #[must_use]
    pub fn clamped_break_minutes(&self) -> u32 {
        clamp_break_minutes(self.break_minutes)
    }
}

/// AI planner settings. The API key comes from the environment, never from
/// the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Gemini model name.
    #[serde(default = "default_model")]
    pub model: String,
}

/// Clamp a focus duration to [1, 120] minutes.
#[must_use]
pub fn clamp_focus_minutes(minutes: u32) -> u32 {
    minutes.clamp(FOCUS_MINUTES_RANGE.0, FOCUS_MINUTES_RANGE.1)
}

/// Clamp a break duration to [1, 30] minutes.
#[must_use]
pub fn clamp_break_minutes(minutes: u32) -> u32 {
    minutes.clamp(BREAK_MINUTES_RANGE.0, BREAK_MINUTES_RANGE.1)
}

/// Clamp a task estimate to [1, 480] minutes.
#[must_use]
pub fn clamp_estimate_minutes(minutes: u32) -> u32 {
    minutes.clamp(ESTIMATE_MINUTES_RANGE.0, ESTIMATE_MINUTES_RANGE.1)
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
            sound: default_true(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, SmarttimeError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SmarttimeError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SmarttimeError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            SmarttimeError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), SmarttimeError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), SmarttimeError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| SmarttimeError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            SmarttimeError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.focus.focus_minutes, 25);
        assert_eq!(config.focus.break_minutes, 5);
        assert!(config.focus.sound);
        assert_eq!(config.ai.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_focus_minutes(0), 1);
        assert_eq!(clamp_focus_minutes(60), 60);
        assert_eq!(clamp_focus_minutes(500), 120);
        assert_eq!(clamp_break_minutes(0), 1);
        assert_eq!(clamp_break_minutes(45), 30);
        assert_eq!(clamp_estimate_minutes(1000), 480);
    }

    #[test]
    fn test_out_of_range_config_is_clamped_on_read() {
        let config = Config {
            focus: FocusConfig {
                focus_minutes: 300,
                break_minutes: 0,
                sound: true,
            },
            ai: AiConfig::default(),
        };

        assert_eq!(config.focus.clamped_focus_minutes(), 120);
        assert_eq!(config.focus.clamped_break_minutes(), 1);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.focus.focus_minutes, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.focus.focus_minutes = 50;
        config.focus.sound = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.focus.focus_minutes, 50);
        assert!(!loaded.focus.sound);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = "focus:\n  focus_minutes: 45\n";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.focus.focus_minutes, 45);
        // Defaults should be used for missing fields
        assert_eq!(config.focus.break_minutes, 5);
        assert_eq!(config.ai.model, DEFAULT_MODEL);
    }
}
