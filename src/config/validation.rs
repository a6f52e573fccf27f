//! Configuration validation utilities and rules

use crate::{
    models::Config,
    error::Result,
};
use colored::*;

/// Delay above which each measurement noticeably stalls the menu
const SLOW_DELAY_WARNING_MS: u64 = 5_000;

/// Range width above which simulated values stop looking like latencies
const WIDE_RANGE_WARNING_MS: i64 = 10_000;

/// Configuration validator with advanced validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Hard errors first
        config.validate()?;

        warnings.extend(Self::validate_simulation_delay(config.simulation_delay_ms));
        warnings.extend(Self::validate_latency_range(config.min_latency_ms, config.max_latency_ms));

        if config.seed.is_some() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "Fixed seed in use, simulated latencies will repeat between runs".to_string()
            ));
        }

        Ok(warnings)
    }

    fn validate_simulation_delay(delay_ms: u64) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if delay_ms == 0 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "Simulation delay is 0ms, measurements will complete instantly".to_string()
            ));
        } else if delay_ms > SLOW_DELAY_WARNING_MS {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Simulation delay of {}ms will make every measurement slow", delay_ms)
            ));
        }

        warnings
    }

    fn validate_latency_range(min_ms: i64, max_ms: i64) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if min_ms <= 0 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Minimum latency of {}ms allows non-positive simulated values", min_ms)
            ));
        }

        if max_ms.saturating_sub(min_ms) > WIDE_RANGE_WARNING_MS {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Latency range {}..={}ms is wider than {}ms", min_ms, max_ms, WIDE_RANGE_WARNING_MS)
            ));
        }

        warnings
    }
}

/// Validation warning levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Get color for terminal display
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            format!("{} {}", tag.color(self.level.color()).bold(), self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
