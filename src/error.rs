//! Error types for the Timecard Anomaly Detection Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that malformed *data* (missing names, unparseable timestamps, bad
//! duration tokens) is never an error: the detection rules recover locally
//! by treating the affected condition as not satisfied. Errors here are
//! reserved for configuration problems.

use thiserror::Error;

/// The main error type for the Timecard Anomaly Detection Engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/detection.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/detection.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The consecutive-days threshold is not usable.
    #[error("Invalid consecutive-days threshold: {value} (must be at least 1)")]
    InvalidThreshold {
        /// The rejected threshold value.
        value: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
