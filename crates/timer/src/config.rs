//! Timer and period configuration
//!
//! Two layers, as everywhere else in the workspace:
//! - [`TimerConfig`] is what the application works with
//! - [`ClockConfigFile`] is its JSON form, converted on load

use jamclock_core::PeriodConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Application-level timer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Name shown in log lines
    pub name: String,
    /// Commands that may queue before senders wait
    pub command_capacity: usize,
    /// Pulse interval when the timer owns its ticker
    pub tick_interval: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            name: default_timer_name(),
            command_capacity: default_command_capacity(),
            tick_interval: Duration::from_millis(default_tick_interval()),
        }
    }
}

impl TimerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        TimerConfig {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

/// Root of the JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfigFile {
    #[serde(default)]
    pub timer: TimerConfigJson,
    #[serde(default)]
    pub period: PeriodConfigJson,
}

/// Timer section (JSON representation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfigJson {
    #[serde(default = "default_timer_name")]
    pub name: String,
    #[serde(default = "default_command_capacity")]
    pub command_capacity: usize,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl Default for TimerConfigJson {
    fn default() -> Self {
        TimerConfigJson {
            name: default_timer_name(),
            command_capacity: default_command_capacity(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

impl TimerConfigJson {
    /// Convert to application-layer TimerConfig
    pub fn to_timer_config(&self) -> TimerConfig {
        TimerConfig {
            name: self.name.clone(),
            command_capacity: self.command_capacity,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }
}

/// Regulation lengths (JSON representation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodConfigJson {
    #[serde(default = "default_period_length")]
    pub period_length_secs: u64,
    #[serde(default = "default_lineup_length")]
    pub lineup_length_secs: u64,
    #[serde(default = "default_jam_length")]
    pub jam_length_secs: u64,
    #[serde(default = "default_timeout_length")]
    pub timeout_length_secs: u64,
}

impl Default for PeriodConfigJson {
    fn default() -> Self {
        PeriodConfigJson {
            period_length_secs: default_period_length(),
            lineup_length_secs: default_lineup_length(),
            jam_length_secs: default_jam_length(),
            timeout_length_secs: default_timeout_length(),
        }
    }
}

impl PeriodConfigJson {
    /// Convert to the domain PeriodConfig
    pub fn to_period_config(&self) -> PeriodConfig {
        PeriodConfig {
            period_length: Duration::from_secs(self.period_length_secs),
            lineup_length: Duration::from_secs(self.lineup_length_secs),
            jam_length: Duration::from_secs(self.jam_length_secs),
            timeout_length: Duration::from_secs(self.timeout_length_secs),
        }
    }
}

impl ClockConfigFile {
    pub fn timer_config(&self) -> TimerConfig {
        self.timer.to_timer_config()
    }

    pub fn period_config(&self) -> PeriodConfig {
        self.period.to_period_config()
    }

    fn validate(self) -> ConfigResult<Self> {
        if self.timer.command_capacity == 0 {
            return Err(ConfigError::Invalid(
                "timer.command_capacity must be at least 1".to_string(),
            ));
        }
        if self.timer.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "timer.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Parse and validate a config from a JSON string
pub fn load_config_from_str(json: &str) -> ConfigResult<ClockConfigFile> {
    let config: ClockConfigFile = serde_json::from_str(json)?;
    config.validate()
}

/// Read, parse, and validate a JSON config file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<ClockConfigFile> {
    let json = std::fs::read_to_string(path)?;
    load_config_from_str(&json)
}

// Default value functions for serde
fn default_timer_name() -> String {
    "timer".to_string()
}

fn default_command_capacity() -> usize {
    16
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_period_length() -> u64 {
    30 * 60
}

fn default_lineup_length() -> u64 {
    30
}

fn default_jam_length() -> u64 {
    2 * 60
}

fn default_timeout_length() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();

        assert_eq!(config.timer_config(), TimerConfig::default());
        assert_eq!(config.period_config(), PeriodConfig::default());
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "timer": {
                "name": "jam",
                "command_capacity": 4,
                "tick_interval_ms": 100
            },
            "period": {
                "jam_length_secs": 90
            }
        }"#;

        let config = load_config_from_str(json).unwrap();
        let timer = config.timer_config();
        assert_eq!(timer.name, "jam");
        assert_eq!(timer.command_capacity, 4);
        assert_eq!(timer.tick_interval, Duration::from_millis(100));

        let period = config.period_config();
        assert_eq!(period.jam_length, Duration::from_secs(90));
        assert_eq!(period.period_length, Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let json = r#"{ "timer": { "tick_interval_ms": 0 } }"#;
        assert!(matches!(
            load_config_from_str(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_config_from_str("{ \"timer\": "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/jamclock.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = TimerConfig::new("period")
            .with_command_capacity(2)
            .with_tick_interval(Duration::from_millis(250));

        assert_eq!(config.name, "period");
        assert_eq!(config.command_capacity, 2);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
    }
}
