//! Colored formatter implementation with terminal color support
//!
//! Mirrors the plain formatter's text exactly and layers ANSI styling on top,
//! with latency values tinted by how fast they are.

use crate::models::LatencyRecord;
use crate::store::RecordStore;
use super::formatter::{
    OutputFormatter, FormattingOptions, APP_TITLE, EMPTY_STORE_MESSAGE, LISTING_HEADING,
};
use std::fmt::Write as _;
use colored::*;

/// Performance level classification for color coding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerformanceLevel {
    Excellent,  // < 50ms
    Good,       // 50-100ms
    Fair,       // 100-300ms
    Poor,       // 300-1000ms
    VeryPoor,   // >= 1000ms
}

impl PerformanceLevel {
    /// Determine performance level from a latency in milliseconds
    pub fn from_latency(latency_ms: i64) -> Self {
        if latency_ms < 50 {
            Self::Excellent
        } else if latency_ms < 100 {
            Self::Good
        } else if latency_ms < 300 {
            Self::Fair
        } else if latency_ms < 1000 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    /// Get color for this performance level
    pub fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Cyan,
            Self::Fair => Color::Yellow,
            Self::Poor => Color::Magenta,
            Self::VeryPoor => Color::Red,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub title: Color,
    pub menu_number: Color,
    pub text: Color,
    pub prompt: Color,
    pub source: Color,
    pub timestamp: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub progress: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Cyan,
            title: Color::Yellow,
            menu_number: Color::Green,
            text: Color::Cyan,
            prompt: Color::Yellow,
            source: Color::Yellow,
            timestamp: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            progress: Color::Yellow,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        Self {
            options,
            color_scheme,
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Bold and tinted, or plain when colors are disabled
    fn title(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold().color(self.color_scheme.title)
        } else {
            text.normal()
        }
    }

    fn rule(&self) -> ColoredString {
        self.colorize(&"=".repeat(self.options.rule_width), self.color_scheme.header)
    }

    /// Latency text tinted by its performance level
    fn format_latency(&self, latency_ms: i64) -> ColoredString {
        let level = PerformanceLevel::from_latency(latency_ms);
        self.colorize(&format!("{}ms", latency_ms), level.color())
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self) -> String {
        format!(
            "{}\n        {}\n{}",
            self.rule(),
            self.title(APP_TITLE),
            self.rule()
        )
    }

    fn format_menu(&self, items: &[(u8, &str)]) -> String {
        let mut output = String::new();
        for (number, label) in items {
            let _ = writeln!(
                output,
                "{} {}",
                self.colorize(&format!("{}.", number), self.color_scheme.menu_number),
                self.colorize(label, self.color_scheme.text)
            );
        }
        let _ = write!(output, "{}", self.rule());
        output
    }

    fn format_prompt(&self, prompt: &str) -> String {
        format!("{} ", self.colorize(&format!("{}:", prompt), self.color_scheme.prompt))
    }

    fn format_record(&self, record: &LatencyRecord) -> String {
        format!(
            "{} {}{} {}{} {}",
            self.colorize("Latency for", self.color_scheme.text),
            self.colorize(record.source(), self.color_scheme.source),
            self.colorize(":", self.color_scheme.text),
            self.format_latency(record.latency_ms()),
            self.colorize(", tested at", self.color_scheme.text),
            self.colorize(&record.formatted_timestamp(), self.color_scheme.timestamp)
        )
    }

    fn format_listing(&self, store: &RecordStore) -> String {
        let mut output = self.colorize(LISTING_HEADING, self.color_scheme.success).to_string();
        if store.is_empty() {
            let _ = write!(output, "\n{}", self.colorize(EMPTY_STORE_MESSAGE, self.color_scheme.error));
            return output;
        }

        for (index, record) in store.list_all() {
            let _ = write!(
                output,
                "\n{} {}",
                self.colorize(&format!("[{}]", index), self.color_scheme.text),
                self.format_record(record)
            );
        }
        output
    }

    fn format_progress(&self, message: &str) -> String {
        self.colorize(message, self.color_scheme.progress).to_string()
    }

    fn format_info(&self, message: &str) -> String {
        self.colorize(message, self.color_scheme.text).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        self.colorize(error, self.color_scheme.error).to_string()
    }

    fn format_warning(&self, warning: &str) -> String {
        self.colorize(warning, self.color_scheme.warning).to_string()
    }

    fn format_success(&self, message: &str) -> String {
        self.colorize(message, self.color_scheme.success).to_string()
    }
}
