//! Network Latency Tester - Main CLI Application
//!
//! Interactive menu for recording and simulating network latency
//! measurements, kept in memory for the lifetime of the session.

use clap::Parser;
use latency_tester::{
    cli::Cli,
    config::{load_config, display_config_summary, validate_config, ValidationLevel},
    error::{AppError, ErrorReporter, Result},
    logging::LoggerFactory,
    output::OutputFormatterFactory,
    prompt::create_prompter,
    App, SimulatedProbe,
    VERSION, PKG_NAME, BUILD_TIME, GIT_COMMIT, TARGET_TRIPLE,
};
use std::{io, process};

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue with the steps that led to it.");
        process::exit(99);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        let error = AppError::validation(message);
        ErrorReporter::new(cli.use_colors(), false).report_error(&error);
        process::exit(error.exit_code());
    }

    let use_color = cli.use_colors();
    let verbose = cli.verbose || cli.debug;

    if let Err(e) = run_application(cli) {
        ErrorReporter::new(use_color, verbose).report_error(&e);

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Show debug info if requested
    if cli.debug {
        eprintln!("{} v{}", PKG_NAME, VERSION);
        eprintln!("Built {} for {} (commit {})", BUILD_TIME, TARGET_TRIPLE, GIT_COMMIT.unwrap_or("unknown"));
        eprintln!("Debug mode enabled");
        eprintln!();
    }

    let force_color = cli.color;

    // Load and validate configuration
    let config = load_config(cli)?;

    if force_color {
        colored::control::set_override(true);
    } else if !config.enable_color {
        colored::control::set_override(false);
    }

    if config.debug {
        eprintln!("Configuration loaded successfully:");
        for line in display_config_summary(&config).lines() {
            eprintln!("  {}", line);
        }
        eprintln!();
    }

    for warning in validate_config(&config)? {
        if warning.level != ValidationLevel::Info || config.verbose || config.debug {
            eprintln!("{}", warning.format(config.enable_color));
        }
    }

    let factory = LoggerFactory::new(config.clone());
    let events = factory.create_store_logger();
    events.logger().info("Session started")
        .field("delay_ms", config.simulation_delay_ms)
        .field("min_latency_ms", config.min_latency_ms)
        .field("max_latency_ms", config.max_latency_ms)
        .log();

    let probe = SimulatedProbe::from_config(&config)?;
    let prompter = create_prompter(config.enable_color);
    let formatter = OutputFormatterFactory::create_formatter(config.enable_color);

    let mut app = App::new(probe, prompter, io::stdout(), formatter, events);
    app.run()?;

    latency_tester::log_info!(app.events().logger(), "Session finished with {} record(s)", app.store().len());

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - Keep --min-latency at or below --max-latency");
            eprintln!("  - --delay-ms accepts 0 to {}", latency_tester::defaults::MAX_SIMULATION_DELAY_MS);
            eprintln!("  - Log formats: console, json, compact");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("Terminal troubleshooting:");
            eprintln!("  - Make sure standard input is readable");
            eprintln!("  - Pipe a script into stdin to run non-interactively");
        }
        _ => {}
    }
}
