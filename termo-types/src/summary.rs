//! Snapshot envelope for the derived statistics of a temperature series.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of the derived statistics of a temperature series.
///
/// Computed on demand from the readings stored at that moment; a snapshot
/// is never updated when the series is mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean of the readings, in degrees Celsius.
    pub average: f64,
    /// Sum of squared deviations from the mean (not divided by the count).
    pub deviation: f64,
    /// Coldest reading in the series.
    pub min: f64,
    /// Hottest reading in the series.
    pub max: f64,
}

impl SummaryStatistics {
    /// Bundle the four derived values into a snapshot.
    #[must_use]
    pub const fn new(average: f64, deviation: f64, min: f64, max: f64) -> Self {
        Self {
            average,
            deviation,
            min,
            max,
        }
    }
}
