//! Latency Tester
//!
//! An interactive record manager for latency observations. Each record pairs a
//! source label with a latency value and a timestamp; values come from an
//! injectable probe (a random simulation by default) and are kept in an
//! in-memory, index-addressed store.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod prompt;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, LatencyRecord};
pub use store::{RecordStore, Records};
pub use probe::{LatencyProbe, SimulatedProbe, FixedProbe};
pub use app::{App, MenuChoice};
pub use output::{OutputFormatter, ColoredFormatter, PlainFormatter, OutputFormatterFactory};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata injected by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");
pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_SIMULATION_DELAY: Duration = Duration::from_millis(1000);
    pub const DEFAULT_MIN_LATENCY_MS: i64 = 1;
    pub const DEFAULT_MAX_LATENCY_MS: i64 = 100;
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Upper bound accepted for the artificial probe delay
    pub const MAX_SIMULATION_DELAY_MS: u64 = 60_000;
}
