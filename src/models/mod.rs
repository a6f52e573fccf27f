//! Data models and structures for the latency tester

pub mod config;
pub mod record;

// Re-export main model types
pub use config::Config;
pub use record::LatencyRecord;
