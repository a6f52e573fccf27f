//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    models::Config,
    error::{AppError, Result},
    config::env::EnvManager,
    logging::LogFormat,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Load from environment file if it exists
        self.load_env_file()?;
        self.parse_without_env_file()
    }

    /// Build configuration from defaults, process environment and CLI only
    pub fn parse_without_env_file(&self) -> Result<Config> {
        let mut config = Config::default();

        config.merge_from_env()?;
        self.apply_cli_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(delay_ms) = self.cli.delay_ms {
            config.simulation_delay_ms = delay_ms;
        }

        if let Some(min) = self.cli.min_latency {
            config.min_latency_ms = min;
        }

        if let Some(max) = self.cli.max_latency {
            config.max_latency_ms = max;
        }

        if self.cli.seed.is_some() {
            config.seed = self.cli.seed;
        }

        if let Some(enable_color) = self.cli.color_override() {
            config.enable_color = enable_color;
        }

        if let Some(ref format) = self.cli.log_format {
            config.log_format = Some(format.parse::<LogFormat>()
                .map_err(|e| AppError::config(format!("Invalid --log-format value '{}': {}", format, e)))?);
        }

        // Verbosity flags are CLI-only
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            eprintln!("Applied CLI overrides to configuration");
            eprintln!("Final config: delay={}ms, range={}..={}ms, enable_color={}",
                    config.simulation_delay_ms, config.min_latency_ms, config.max_latency_ms, config.enable_color);
        }

        Ok(())
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Simulation Delay: {}ms", config.simulation_delay_ms));
    summary.push(format!("Latency Range: {}..={}ms", config.min_latency_ms, config.max_latency_ms));
    summary.push(format!(
        "Seed: {}",
        config.seed.map_or_else(|| "random".to_string(), |seed| seed.to_string())
    ));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Log Format: {:?}", config.effective_log_format()));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
