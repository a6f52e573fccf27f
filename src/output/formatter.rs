//! Core formatting trait and the plain text implementation

use crate::models::LatencyRecord;
use crate::store::RecordStore;
use std::fmt::Write as _;

/// Title shown between the header rules
pub const APP_TITLE: &str = "⚡ Network Latency Tester ⚡";

/// Main trait for output formatting
///
/// Formatters only build strings; the caller decides where they are written.
pub trait OutputFormatter {
    /// Format the banner printed before every menu
    fn format_header(&self) -> String;

    /// Format numbered menu entries followed by a closing rule
    fn format_menu(&self, items: &[(u8, &str)]) -> String;

    /// Format a question put to the user
    fn format_prompt(&self, prompt: &str) -> String;

    /// Format a single record
    fn format_record(&self, record: &LatencyRecord) -> String;

    /// Format the full store listing, or the empty-store notice
    fn format_listing(&self, store: &RecordStore) -> String;

    /// Format an in-progress notice
    fn format_progress(&self, message: &str) -> String;

    /// Format informational messages
    fn format_info(&self, message: &str) -> String;

    /// Format error messages
    fn format_error(&self, error: &str) -> String;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> String;

    /// Format success messages
    fn format_success(&self, message: &str) -> String;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Width of the `=` rules around the header and menu
    pub rule_width: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            rule_width: 40,
        }
    }
}

/// Message shown when listing an empty store
pub const EMPTY_STORE_MESSAGE: &str = "No records available.";

/// Heading printed before a listing
pub const LISTING_HEADING: &str = "Displaying all records:";

/// Plain text formatter without any terminal styling
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    fn rule(&self) -> String {
        "=".repeat(self.options.rule_width)
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new(FormattingOptions {
            enable_color: false,
            ..FormattingOptions::default()
        })
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self) -> String {
        let rule = self.rule();
        format!("{}\n        {}\n{}", rule, APP_TITLE, rule)
    }

    fn format_menu(&self, items: &[(u8, &str)]) -> String {
        let mut output = String::new();
        for (number, label) in items {
            let _ = writeln!(output, "{}. {}", number, label);
        }
        output.push_str(&self.rule());
        output
    }

    fn format_prompt(&self, prompt: &str) -> String {
        format!("{}: ", prompt)
    }

    fn format_record(&self, record: &LatencyRecord) -> String {
        record.to_string()
    }

    fn format_listing(&self, store: &RecordStore) -> String {
        let mut output = String::from(LISTING_HEADING);
        if store.is_empty() {
            let _ = write!(output, "\n{}", EMPTY_STORE_MESSAGE);
            return output;
        }

        for (index, record) in store.list_all() {
            let _ = write!(output, "\n[{}] {}", index, self.format_record(record));
        }
        output
    }

    fn format_progress(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_info(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        error.to_string()
    }

    fn format_warning(&self, warning: &str) -> String {
        warning.to_string()
    }

    fn format_success(&self, message: &str) -> String {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(source: &str, latency: i64) -> LatencyRecord {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        LatencyRecord::with_timestamp(source, latency, ts)
    }

    #[test]
    fn test_header_layout() {
        let header = PlainFormatter::default().format_header();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(40));
        assert!(lines[1].contains("Network Latency Tester"));
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn test_menu_entries_are_numbered() {
        let menu = PlainFormatter::default().format_menu(&[(1, "Add"), (2, "Quit")]);
        assert!(menu.starts_with("1. Add\n2. Quit\n"));
        assert!(menu.ends_with(&"=".repeat(40)));
    }

    #[test]
    fn test_listing_empty_store() {
        let store = RecordStore::new();
        assert_eq!(
            PlainFormatter::default().format_listing(&store),
            format!("{}\n{}", LISTING_HEADING, EMPTY_STORE_MESSAGE)
        );
    }

    #[test]
    fn test_listing_with_records() {
        let mut store = RecordStore::new();
        store.add(record("LA", 10));
        store.add(record("NYC", 42));

        let listing = PlainFormatter::default().format_listing(&store);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], LISTING_HEADING);
        assert_eq!(lines[1], "[0] Latency for LA: 10ms, tested at 2024-01-02 03:04:05.000 UTC");
        assert_eq!(lines[2], "[1] Latency for NYC: 42ms, tested at 2024-01-02 03:04:05.000 UTC");
    }

    #[test]
    fn test_messages() {
        let formatter = PlainFormatter::default();
        assert_eq!(formatter.format_error("Error: Invalid index."), "Error: Invalid index.");
        assert_eq!(formatter.format_warning("slow"), "slow");
        assert_eq!(formatter.format_prompt("Enter the source location"), "Enter the source location: ");
    }
}
