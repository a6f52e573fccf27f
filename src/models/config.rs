//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::logging::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Artificial delay applied by the simulated probe, in milliseconds
    #[serde(default = "default_simulation_delay_ms")]
    pub simulation_delay_ms: u64,

    /// Lowest latency the simulation may draw
    #[serde(default = "default_min_latency_ms")]
    pub min_latency_ms: i64,

    /// Highest latency the simulation may draw
    #[serde(default = "default_max_latency_ms")]
    pub max_latency_ms: i64,

    /// Fixed RNG seed for reproducible sessions
    #[serde(default)]
    pub seed: Option<u64>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Explicit log format; derived from the debug flag when unset
    #[serde(default)]
    pub log_format: Option<LogFormat>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation_delay_ms: default_simulation_delay_ms(),
            min_latency_ms: default_min_latency_ms(),
            max_latency_ms: default_max_latency_ms(),
            seed: None,
            enable_color: default_enable_color(),
            log_format: None,
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the simulation delay as Duration
    pub fn simulation_delay(&self) -> Duration {
        Duration::from_millis(self.simulation_delay_ms)
    }

    /// Inclusive range the simulated probe draws from
    pub fn latency_range(&self) -> RangeInclusive<i64> {
        self.min_latency_ms..=self.max_latency_ms
    }

    /// Minimum log level implied by the verbosity flags
    pub fn log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else if self.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        }
    }

    /// Log format, falling back to JSON in debug mode
    pub fn effective_log_format(&self) -> LogFormat {
        match self.log_format {
            Some(format) => format,
            None if self.debug => LogFormat::Json,
            None => LogFormat::Console,
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.min_latency_ms > self.max_latency_ms {
            return Err(AppError::config(format!(
                "Minimum latency ({}ms) cannot exceed maximum latency ({}ms)",
                self.min_latency_ms, self.max_latency_ms
            )));
        }

        if self.simulation_delay_ms > crate::defaults::MAX_SIMULATION_DELAY_MS {
            return Err(AppError::config(format!(
                "Simulation delay cannot exceed {}ms, got: {}ms",
                crate::defaults::MAX_SIMULATION_DELAY_MS,
                self.simulation_delay_ms
            )));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(delay) = std::env::var("SIMULATION_DELAY_MS") {
            self.simulation_delay_ms = delay.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid SIMULATION_DELAY_MS value '{}': {}", delay, e)))?;
        }

        if let Ok(min) = std::env::var("LATENCY_MIN_MS") {
            self.min_latency_ms = min.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid LATENCY_MIN_MS value '{}': {}", min, e)))?;
        }

        if let Ok(max) = std::env::var("LATENCY_MAX_MS") {
            self.max_latency_ms = max.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid LATENCY_MAX_MS value '{}': {}", max, e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Ok(format) = std::env::var("LOG_FORMAT") {
            self.log_format = Some(format.parse()
                .map_err(|e| AppError::config(format!("Invalid LOG_FORMAT value '{}': {}", format, e)))?);
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_simulation_delay_ms() -> u64 {
    crate::defaults::DEFAULT_SIMULATION_DELAY.as_millis() as u64
}

fn default_min_latency_ms() -> i64 {
    crate::defaults::DEFAULT_MIN_LATENCY_MS
}

fn default_max_latency_ms() -> i64 {
    crate::defaults::DEFAULT_MAX_LATENCY_MS
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
