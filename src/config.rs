//! Game tuning: phase timings and the difficulty staircase.
//!
//! Every field has a default, so a JSON file only needs the keys it wants
//! to change:
//!
//! ```rust
//! use recall::config::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "timing": { "base_show_ms": 3000 } }"#).unwrap();
//! assert_eq!(config.timing.base_show_ms, 3000);
//! assert_eq!(config.timing.pause_ms, 500);
//! ```

use crate::difficulty::{DifficultyConfig, MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// How long each timed phase and each transient notice lasts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time the digits stay up at the minimum length
    pub base_show_ms: u64,
    /// Extra show time per digit above the minimum length
    pub per_extra_digit_ms: u64,
    /// Blank gap between hiding the digits and opening input
    pub pause_ms: u64,
    /// How long the verdict stays up before the next round
    pub result_dwell_ms: u64,
    pub level_notice_ms: u64,
    pub invalid_notice_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_show_ms: 2_500,
            per_extra_digit_ms: 500,
            pause_ms: 500,
            result_dwell_ms: 1_000,
            level_notice_ms: 1_800,
            invalid_notice_ms: 1_500,
        }
    }
}

impl TimingConfig {
    /// Longer first look: three seconds at the minimum length.
    pub fn relaxed() -> Self {
        Self {
            base_show_ms: 3_000,
            ..Self::default()
        }
    }

    /// How long `length` digits stay on screen.
    ///
    /// ```rust
    /// use recall::config::TimingConfig;
    /// use std::time::Duration;
    ///
    /// let timing = TimingConfig::default();
    /// assert_eq!(timing.show_duration(6), Duration::from_millis(2_500));
    /// assert_eq!(timing.show_duration(9), Duration::from_millis(4_000));
    /// ```
    pub fn show_duration(&self, length: usize) -> Duration {
        let extra = length.saturating_sub(MIN_LENGTH) as u64;
        Duration::from_millis(
            self.base_show_ms
                .saturating_add(extra.saturating_mul(self.per_extra_digit_ms)),
        )
    }

    /// Gap between hiding the number and asking for it
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// How long a result stays up before the next round
    pub fn result_dwell(&self) -> Duration {
        Duration::from_millis(self.result_dwell_ms)
    }

    /// How long a level change message stays up
    pub fn level_notice(&self) -> Duration {
        Duration::from_millis(self.level_notice_ms)
    }

    /// How long a rejected answer message stays up
    pub fn invalid_notice(&self) -> Duration {
        Duration::from_millis(self.invalid_notice_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub difficulty: DifficultyConfig,
}

/// A configuration value the game cannot run with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("timing.base_show_ms must be greater than zero")]
    ZeroShowDuration,

    #[error("difficulty.step_width must be greater than zero")]
    ZeroStepWidth,

    #[error("difficulty.max_length ({max}) is below the minimum length ({min})")]
    CapBelowMinimum { max: usize, min: usize },
}

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {}", join_violations(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl GameConfig {
    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.timing.base_show_ms == 0 {
            Validation::fail(ConfigViolation::ZeroShowDuration)
        } else {
            Validation::success(())
        });

        checks.push(if self.difficulty.step_width == 0 {
            Validation::fail(ConfigViolation::ZeroStepWidth)
        } else {
            Validation::success(())
        });

        if let Some(max) = self.difficulty.max_length {
            checks.push(if max < MIN_LENGTH {
                Validation::fail(ConfigViolation::CapBelowMinimum {
                    max,
                    min: MIN_LENGTH,
                })
            } else {
                Validation::success(())
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`GameConfig::validate`] as a `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigViolation>> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config
            .check()
            .map_err(|violations| ConfigError::Invalid { violations })?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
