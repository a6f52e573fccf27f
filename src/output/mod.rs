//! Output formatting and display system
//!
//! This module provides the console rendering for the menu, records and
//! status messages, in colored and plain text flavors.

mod formatter;
mod colored;

pub use formatter::{
    OutputFormatter,
    PlainFormatter,
    FormattingOptions,
    APP_TITLE,
    EMPTY_STORE_MESSAGE,
    LISTING_HEADING,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
    PerformanceLevel,
};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            ..FormattingOptions::default()
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false)
    }
}
