//! Command-line interface definition

use clap::Parser;

/// Latency Tester - manage simulated latency records from an interactive menu
#[derive(Parser, Debug, Clone)]
#[command(name = "latency-tester")]
#[command(version, about, long_about = None)]
#[command(after_help = crate::config::EnvManager::display_env_help())]
pub struct Cli {
    /// Artificial delay applied to each simulated measurement, in milliseconds
    #[arg(long, value_name = "MS", value_parser = parse_delay)]
    pub delay_ms: Option<u64>,

    /// Lowest latency the simulation may produce
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub min_latency: Option<i64>,

    /// Highest latency the simulation may produce
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub max_latency: Option<i64>,

    /// Seed for reproducible simulated latencies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Log format: console, json or compact
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let (Some(min), Some(max)) = (self.min_latency, self.max_latency) {
            if min > max {
                return Err(format!("--min-latency ({}) cannot exceed --max-latency ({})", min, max));
            }
        }

        if let Some(ref format) = self.log_format {
            if let Err(e) = format.parse::<crate::logging::LogFormat>() {
                return Err(e.to_string());
            }
        }

        Ok(())
    }

    /// Color preference expressed on the command line, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)  // Force color output when --color is specified
        } else if self.no_color {
            Some(false) // Disable color output when --no-color is specified
        } else {
            None
        }
    }

    /// Check if colors should be enabled before configuration is loaded
    pub fn use_colors(&self) -> bool {
        self.color_override().unwrap_or_else(supports_color)
    }
}

/// Parse the simulation delay in milliseconds
fn parse_delay(s: &str) -> Result<u64, String> {
    if s.starts_with('+') || s.starts_with("0x") || s.starts_with("0X") {
        return Err(format!("Invalid delay: {}", s));
    }

    s.parse::<u64>()
        .map_err(|_| format!("Invalid delay: {}", s))
        .and_then(|ms| {
            if ms > crate::defaults::MAX_SIMULATION_DELAY_MS {
                Err(format!("Delay cannot exceed {} milliseconds", crate::defaults::MAX_SIMULATION_DELAY_MS))
            } else {
                Ok(ms)
            }
        })
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.delay_ms, None);
        assert_eq!(cli.min_latency, None);
        assert_eq!(cli.max_latency, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert_eq!(cli.color_override(), None);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::parse_from([
            "test",
            "--delay-ms", "0",
            "--min-latency", "-10",
            "--max-latency", "500",
            "--seed", "99",
            "--no-color",
            "--verbose",
            "--debug",
            "--log-format", "compact",
        ]);

        assert_eq!(cli.delay_ms, Some(0));
        assert_eq!(cli.min_latency, Some(-10));
        assert_eq!(cli.max_latency, Some(500));
        assert_eq!(cli.seed, Some(99));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.debug);
        assert_eq!(cli.log_format.as_deref(), Some("compact"));
        assert_eq!(cli.color_override(), Some(false));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_delay_parsing() {
        assert_eq!(parse_delay("250"), Ok(250));
        assert!(parse_delay("+5").is_err());
        assert!(parse_delay("0x10").is_err());
        assert!(parse_delay("-1").is_err());
        assert!(parse_delay("60001").is_err());
        assert!(Cli::try_parse_from(["test", "--delay-ms", "abc"]).is_err());
    }

    #[test]
    fn test_conflicting_color_flags() {
        let cli = Cli::parse_from(["test", "--color", "--no-color"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let cli = Cli::parse_from(["test", "--min-latency", "80", "--max-latency", "20"]);
        let err = cli.validate().unwrap_err();
        assert!(err.contains("--min-latency"));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let cli = Cli::parse_from(["test", "--log-format", "xml"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_help_lists_environment_variables() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("--delay-ms"));
        assert!(help.contains("SIMULATION_DELAY_MS"));
        assert!(help.contains("Configuration Priority"));
    }

    #[test]
    fn test_forced_color() {
        let cli = Cli::parse_from(["test", "--color"]);
        assert!(cli.use_colors());
    }
}
