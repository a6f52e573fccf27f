//! Latency record data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used when a record is displayed
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

/// A single latency observation.
///
/// Records are plain values: once built they are never changed in place.
/// Updating a record in a store means replacing it with a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRecord {
    source: String,
    latency_ms: i64,
    timestamp: DateTime<Utc>,
}

impl LatencyRecord {
    /// Create a record stamped with the current time
    pub fn new<S: Into<String>>(source: S, latency_ms: i64) -> Self {
        Self::with_timestamp(source, latency_ms, Utc::now())
    }

    /// Create a record with an explicit timestamp
    pub fn with_timestamp<S: Into<String>>(source: S, latency_ms: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            latency_ms,
            timestamp,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Latency in milliseconds. Any sign or magnitude is accepted.
    pub fn latency_ms(&self) -> i64 {
        self.latency_ms
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for LatencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latency for {}: {}ms, tested at {}",
            self.source,
            self.latency_ms,
            self.formatted_timestamp()
        )
    }
}
