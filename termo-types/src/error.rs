use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the termo workspace.
///
/// This covers misuse of the batch constructors, per-reading validation
/// failures, and aggregate queries issued against a series with no readings.
#[derive(Debug, Error, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum TermoError {
    /// A batch constructor was handed no readings at all.
    #[error("no samples provided")]
    EmptyInput,

    /// A reading sits below the absolute-zero floor and was rejected.
    #[error("invalid sample: {value}°C is below absolute zero (-273°C)")]
    InvalidSample {
        /// The rejected reading, in degrees Celsius.
        value: f64,
    },

    /// An aggregate query was issued against a series with no readings.
    #[error("series is empty")]
    EmptySeries,
}

impl TermoError {
    /// Helper: build an `InvalidSample` error for a rejected reading.
    #[must_use]
    pub const fn invalid_sample(value: f64) -> Self {
        Self::InvalidSample { value }
    }

    /// Returns true if the error reports rejected input rather than a
    /// query against an empty series.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InvalidSample { .. })
    }
}
