//! Error taxonomy shared by every accounting-time operation.

use thiserror::Error;

/// Result type alias using `TimeError`.
pub type TimeResult<T> = Result<T, TimeError>;

/// Errors reported by unit-of-time construction, comparison, conversion and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// A numeric field is outside its valid domain.
    #[error("{name} is out of range: {message}")]
    ArgumentOutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A field holds a disallowed value, or two values of incompatible types were combined.
    #[error("{name} is invalid: {message}")]
    ArgumentInvalid {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A value cannot be converted to the requested concrete type.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Text could not be decoded into a unit-of-time or reporting period.
    #[error("Cannot parse '{input}': {reason}")]
    Parse {
        /// The text that failed to decode.
        input: String,
        /// Why decoding failed.
        reason: String,
    },
}

impl TimeError {
    /// Builds an [`TimeError::ArgumentOutOfRange`].
    #[must_use]
    pub fn out_of_range(name: &'static str, message: impl Into<String>) -> Self {
        Self::ArgumentOutOfRange {
            name,
            message: message.into(),
        }
    }

    /// Builds an [`TimeError::ArgumentInvalid`].
    #[must_use]
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::ArgumentInvalid {
            name,
            message: message.into(),
        }
    }

    /// Builds a [`TimeError::Parse`].
    #[must_use]
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns a stable error code for callers that map errors onto wire responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ArgumentOutOfRange { .. } => "ARGUMENT_OUT_OF_RANGE",
            Self::ArgumentInvalid { .. } => "ARGUMENT_INVALID",
            Self::InvalidOperation(_) => "INVALID_OPERATION",
            Self::Parse { .. } => "PARSE_ERROR",
        }
    }
}
