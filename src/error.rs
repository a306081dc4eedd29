//! Error types for the Holiday Query Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while answering calendar queries.

use thiserror::Error;

/// The main error type for the Holiday Query Engine.
///
/// All fallible operations in the engine return this error type. The HTTP
/// layer maps each variant to its own status code.
///
/// # Example
///
/// ```
/// use holiday_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "day".to_string(),
///     message: "must be an integer between 1 and 31".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'day': must be an integer between 1 and 31");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The override table for a year could not be obtained.
    #[error("Override table for {year} unavailable: {message}")]
    UpstreamUnavailable {
        /// The year whose table was requested.
        year: i32,
        /// A description of the failure.
        message: String,
    },

    /// A caller-supplied argument was malformed or out of range.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// A bounded look-ahead finished without finding a candidate.
    #[error("No candidate found for {search} within {limit} steps")]
    NoCandidateFound {
        /// What was being searched for (e.g. "weekend").
        search: String,
        /// The bound that was exhausted.
        limit: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns `true` if the caller may retry the same request later.
    ///
    /// Only a failure to obtain the override table is transient; every other
    /// error needs different input or different data.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::UpstreamUnavailable { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
