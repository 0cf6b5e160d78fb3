//! Configuration module
//!
//! Loads configuration from environment variables.

use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Scenario report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log layer used by the subscriber
    pub log_format: LogFormat,

    /// How scenario reports are printed
    pub report_format: ReportFormat,

    /// Scenario numbers to run (None = all)
    pub scenarios: Option<BTreeSet<u32>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        let report_format = match lookup("REPORT_FORMAT") {
            Some(value) => value.parse()?,
            None => ReportFormat::default(),
        };

        let scenarios = lookup("DEMO_SCENARIOS")
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_scenarios(&value))
            .transpose()?;

        Ok(Self {
            log_format,
            report_format,
            scenarios,
        })
    }

    /// Check if a scenario is selected for this run
    pub fn runs_scenario(&self, number: u32) -> bool {
        self.scenarios
            .as_ref()
            .map_or(true, |selected| selected.contains(&number))
    }
}

fn parse_scenarios(value: &str) -> Result<BTreeSet<u32>, ConfigError> {
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DEMO_SCENARIOS"))
        })
        .collect()
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("REPORT_FORMAT")),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
