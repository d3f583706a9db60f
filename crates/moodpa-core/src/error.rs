//! # Error Types: Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Input errors name the offending field and the rejected value.
//! - A non-conforming parameter is a normal evaluation outcome, never an
//!   error. Only malformed input or configuration produces an `Err`.
//! - A graphical element missing from a caller's element map is read as
//!   absent and is not an error.

use thiserror::Error;

/// Top-level error type for MOOD.PA.
#[derive(Error, Debug)]
pub enum MoodpaError {
    /// Evaluation rejected its input.
    #[error("compliance evaluation error: {0}")]
    Compliance(#[from] ComplianceError),

    /// Threshold configuration is invalid or unreadable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error raised by the compliance evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplianceError {
    /// A measurement or parameter value is non-finite, negative, or out of range.
    #[error("invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        /// Name of the rejected field (e.g. `lotArea`).
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A ratio was requested over a zero denominator.
    #[error("division by zero: {field} is 0 while deriving occupancy rate and floor area ratio")]
    DivisionByZero {
        /// Name of the zero-valued field.
        field: &'static str,
    },
}

/// Error in threshold configuration or municipal profile loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A threshold is non-finite or negative.
    #[error("invalid threshold {name}: {value} ({reason})")]
    InvalidThreshold {
        /// Serialized name of the threshold.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The profile document could not be parsed.
    #[error("failed to parse municipal profile: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The profile file could not be read.
    #[error("io error reading {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The profile is structurally valid but semantically incomplete.
    #[error("municipal profile rejected: {0}")]
    Profile(String),
}
