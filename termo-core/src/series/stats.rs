//! Aggregate queries over a stored series.
//!
//! Every query here walks the readings at call time; nothing is cached or
//! kept in sync across mutations.

use termo_types::{SummaryStatistics, TermoError};

use crate::series::store::{ABSOLUTE_ZERO_C, TempSeries};

// Anchor for `max`: the mirror of the absolute-zero floor.
const HOT_ANCHOR_C: f64 = -ABSOLUTE_ZERO_C;

impl TempSeries {
    /// Arithmetic mean of the stored readings. Summation is naive
    /// left-to-right.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    ///
    /// ```
    /// use termo_core::TempSeries;
    /// let series = TempSeries::from_samples(&[-5.0, 0.0, 5.0, 10.0])?;
    /// assert_eq!(series.average()?, 2.5);
    /// # Ok::<(), termo_core::TermoError>(())
    /// ```
    pub fn average(&self) -> Result<f64, TermoError> {
        if self.is_empty() {
            return Err(TermoError::EmptySeries);
        }
        Ok(self.total() / self.len() as f64)
    }

    /// Sum of squared deviations from the mean, Σ(x - mean)².
    ///
    /// The total is not divided by the reading count, so this measures
    /// spread rather than variance.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    pub fn deviation(&self) -> Result<f64, TermoError> {
        let mean = self.average()?;
        Ok(self
            .as_slice()
            .iter()
            .map(|&t| {
                let d = t - mean;
                d * d
            })
            .sum())
    }

    /// Coldest reading, found as the stored value nearest the
    /// [`ABSOLUTE_ZERO_C`] anchor.
    ///
    /// The validity floor guarantees every reading is at or above the
    /// anchor, so this is the literal minimum.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    pub fn min(&self) -> Result<f64, TermoError> {
        self.closest_to(ABSOLUTE_ZERO_C)
    }

    /// Hottest reading, found as the stored value nearest +273 °C.
    ///
    /// No upper bound is enforced on readings, so a value past +273 °C
    /// competes by distance to the anchor rather than by magnitude.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    pub fn max(&self) -> Result<f64, TermoError> {
        self.closest_to(HOT_ANCHOR_C)
    }

    /// Stored reading nearest 0 °C.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    pub fn closest_to_zero(&self) -> Result<f64, TermoError> {
        self.closest_to(0.0)
    }

    /// Stored reading with the smallest absolute distance to `target`.
    ///
    /// Linear scan in insertion order; on ties the earliest reading wins,
    /// since the scan only replaces its candidate on a strictly smaller
    /// distance.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    ///
    /// ```
    /// use termo_core::TempSeries;
    /// let series = TempSeries::from_samples(&[-2.0, 2.0])?;
    /// // Equidistant from zero; the earlier reading wins.
    /// assert_eq!(series.closest_to(0.0)?, -2.0);
    /// # Ok::<(), termo_core::TermoError>(())
    /// ```
    pub fn closest_to(&self, target: f64) -> Result<f64, TermoError> {
        if self.is_empty() {
            return Err(TermoError::EmptySeries);
        }

        let mut best_distance = f64::INFINITY;
        let mut closest = 0.0;
        for &reading in self.as_slice() {
            let distance = (reading - target).abs();
            if distance < best_distance {
                best_distance = distance;
                closest = reading;
            }
        }

        Ok(closest)
    }

    /// Readings strictly below `threshold`, in insertion order.
    ///
    /// An empty series yields an empty vector rather than an error.
    #[must_use]
    pub fn temps_less_than(&self, threshold: f64) -> Vec<f64> {
        self.as_slice()
            .iter()
            .copied()
            .filter(|&t| t < threshold)
            .collect()
    }

    /// Readings strictly above `threshold`, in insertion order.
    ///
    /// An empty series yields an empty vector rather than an error.
    #[must_use]
    pub fn temps_greater_than(&self, threshold: f64) -> Vec<f64> {
        self.as_slice()
            .iter()
            .copied()
            .filter(|&t| t > threshold)
            .collect()
    }

    /// Compute a [`SummaryStatistics`] snapshot of the current readings.
    ///
    /// The snapshot is not kept in sync with later mutations.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptySeries`] when no readings are stored.
    ///
    /// ```
    /// use termo_core::TempSeries;
    /// let series = TempSeries::from_samples(&[-5.0, 0.0, 5.0, 10.0])?;
    /// let summary = series.summary()?;
    /// assert_eq!(summary.average, 2.5);
    /// assert_eq!(summary.min, -5.0);
    /// assert_eq!(summary.max, 10.0);
    /// # Ok::<(), termo_core::TermoError>(())
    /// ```
    pub fn summary(&self) -> Result<SummaryStatistics, TermoError> {
        Ok(SummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }
}
