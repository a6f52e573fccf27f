//! Error handling for the latency tester

use thiserror::Error;

/// Custom error types for the latency tester
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (terminal, .env file, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (numbers, JSON, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Non-numeric or otherwise unusable input typed at the menu
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Record index outside the current store bounds
    #[error("Record not found: index {index} is out of range (store holds {len} record(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// Latency probe failures
    #[error("Measurement error: {0}")]
    Measurement(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a new measurement error
    pub fn measurement<S: Into<String>>(message: S) -> Self {
        Self::Measurement(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::InvalidInput(_) => "INPUT",
            Self::IndexOutOfRange { .. } => "NOT_FOUND",
            Self::Measurement(_) => "MEASUREMENT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if the menu loop can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidInput(_) | Self::IndexOutOfRange { .. } | Self::Measurement(_) => true,
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => false,
            Self::Io(_) | Self::Internal(_) => false,
        }
    }

    /// Errors caused by what the user typed or configured
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::InvalidInput(_) | Self::IndexOutOfRange { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid setting: {}\n\nSuggestion: Check the latency range and delay values.", msg)
            }
            Self::Io(msg) => {
                format!("Terminal or file operation failed: {}\n\nSuggestion: Make sure standard input and output are available.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the format of your input data or configuration values.", msg)
            }
            Self::InvalidInput(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Enter whole numbers for indices and latency values.", msg)
            }
            Self::IndexOutOfRange { index, len } => {
                format!("No record at index {} (valid indices: {}).\n\nSuggestion: Use 'Show all records' to see the current indices.",
                    index, valid_range(*len))
            }
            Self::Measurement(msg) => {
                format!("Latency measurement failed: {}\n\nSuggestion: Try measuring again.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::InvalidInput(_) | Self::IndexOutOfRange { .. } => 2,  // Bad menu input
            Self::Measurement(_) => 3,
            Self::Io(_) => 5,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::InvalidInput(_) | Self::IndexOutOfRange { .. } => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Measurement(_) => {
                    format!("[{}] {}", category.magenta().bold(), message.magenta())
                }
                Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

fn valid_range(len: usize) -> String {
    if len == 0 {
        "none, the store is empty".to_string()
    } else {
        format!("0..={}", len - 1)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(error: std::str::ParseBoolError) -> Self {
        Self::parse(format!("Boolean parse error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error reporter for fatal errors surfaced from `main`
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_error(error));
    }

    /// Render the report without printing it
    pub fn format_error(&self, error: &AppError) -> String {
        let mut report = error.format_for_console(self.use_color);

        if self.verbose {
            report.push_str("\n\n");
            report.push_str(&error.user_friendly_message());
        }

        report
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}
