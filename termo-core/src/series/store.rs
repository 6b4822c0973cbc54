use termo_types::TermoError;

/// Lowest physically meaningful reading, in degrees Celsius.
///
/// Readings below this floor are rejected on insert.
pub const ABSOLUTE_ZERO_C: f64 = -273.0;

/// A growable, ordered series of validated temperature readings.
///
/// Readings are kept in insertion order, duplicates allowed, and every
/// stored value satisfies the [`ABSOLUTE_ZERO_C`] floor. Storage is an
/// explicit buffer plus a logical length, so the doubling growth policy
/// stays observable through [`capacity`](TempSeries::capacity).
///
/// Batch insertion is deliberately not atomic: valid readings are kept
/// even when the batch as a whole is rejected. See
/// [`append`](TempSeries::append).
#[derive(Debug, Clone, Default)]
pub struct TempSeries {
    buf: Box<[f64]>,
    len: usize,
}

impl TempSeries {
    /// Create an empty series with no storage allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from a batch of raw readings.
    ///
    /// Valid readings are retained in their original order in a buffer
    /// sized to the batch. Readings below [`ABSOLUTE_ZERO_C`] are skipped,
    /// and once the whole batch has been scanned the construction fails,
    /// reporting the last rejected value; the partially built series is
    /// dropped with the error.
    ///
    /// # Errors
    /// Returns [`TermoError::EmptyInput`] for an empty batch and
    /// [`TermoError::InvalidSample`] when any reading is below the floor.
    ///
    /// ```
    /// use termo_core::TempSeries;
    /// let series = TempSeries::from_samples(&[21.5, 19.0, 23.1])?;
    /// assert_eq!(series.len(), 3);
    /// # Ok::<(), termo_core::TermoError>(())
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self, TermoError> {
        if samples.is_empty() {
            return Err(TermoError::EmptyInput);
        }

        let mut series = Self {
            buf: vec![0.0; samples.len()].into_boxed_slice(),
            len: 0,
        };
        let mut rejected = None;
        for &sample in samples {
            if sample < ABSOLUTE_ZERO_C {
                #[cfg(feature = "tracing")]
                tracing::warn!(value = sample, "rejecting reading below absolute zero");
                rejected = Some(sample);
            } else {
                series.buf[series.len] = sample;
                series.len += 1;
            }
        }

        match rejected {
            Some(value) => Err(TermoError::invalid_sample(value)),
            None => Ok(series),
        }
    }

    /// Append a batch of raw readings, returning the truncated running sum.
    ///
    /// Each reading is validated independently and the batch is not
    /// atomic: valid readings are appended in order even when a later
    /// reading is rejected, and the call then fails reporting the last
    /// rejected value. Readings appended before the failure stay in the
    /// series.
    ///
    /// On success the return value is the sum of **all** currently stored
    /// readings truncated toward zero; use [`total`](Self::total) for the
    /// exact sum.
    ///
    /// # Errors
    /// Returns [`TermoError::InvalidSample`] when any reading in the batch
    /// is below [`ABSOLUTE_ZERO_C`].
    ///
    /// ```
    /// use termo_core::TempSeries;
    /// let mut series = TempSeries::new();
    /// assert_eq!(series.append(&[1.5, 2.0])?, 3);
    /// # Ok::<(), termo_core::TermoError>(())
    /// ```
    pub fn append(&mut self, samples: &[f64]) -> Result<i64, TermoError> {
        let mut rejected = None;
        for &sample in samples {
            if sample < ABSOLUTE_ZERO_C {
                #[cfg(feature = "tracing")]
                tracing::warn!(value = sample, "rejecting reading below absolute zero");
                rejected = Some(sample);
            } else {
                self.push(sample);
            }
        }

        match rejected {
            Some(value) => Err(TermoError::invalid_sample(value)),
            None => Ok(self.total() as i64),
        }
    }

    fn push(&mut self, sample: f64) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf[self.len] = sample;
        self.len += 1;
    }

    // Doubling growth; a fresh empty series starts at capacity 1.
    fn grow(&mut self) {
        let next_cap = if self.buf.is_empty() {
            1
        } else {
            self.buf.len() * 2
        };
        let mut next = vec![0.0; next_cap].into_boxed_slice();
        next[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = next;
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, capacity = self.buf.len(), "grew sample buffer");
    }

    /// Number of readings currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no readings are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the underlying buffer; always at least [`len`](Self::len).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Stored readings in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.buf[..self.len]
    }

    /// Exact sum of all stored readings.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_slice().iter().sum()
    }
}
