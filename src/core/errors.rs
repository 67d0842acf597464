//! Shared error types for the application

use thiserror::Error;

/// Main error type for caesar operations
#[derive(Debug, Error)]
pub enum Error {
    /// A shift value could not be interpreted as an integer
    #[error("Invalid shift value: {input}")]
    InvalidShift { input: String },

    /// An operation that needs a shift was invoked without one
    #[error("--shift is required for {operation}")]
    MissingShift { operation: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid shift error from the rejected input
    pub fn invalid_shift(input: impl Into<String>) -> Self {
        Self::InvalidShift {
            input: input.into(),
        }
    }

    /// Create a missing shift error for the named operation
    pub fn missing_shift(operation: impl Into<String>) -> Self {
        Self::MissingShift {
            operation: operation.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
