//! Fixed-window running average of inter-sample durations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::time::{Duration, Instant};

/// Number of samples kept when no window is configured.
pub const DEFAULT_WINDOW: usize = 5;

/// Largest number of samples a running average will keep.
pub const MAX_WINDOW: usize = 1000;

/// Running average of the time between consecutive samples.
///
/// Samples are stored in a circular buffer of fixed capacity. Until the
/// buffer has been filled once, the average is taken over the samples
/// recorded so far; afterwards it is a moving average over the most recent
/// `capacity` samples.
#[derive(Debug, Clone)]
pub struct RunningAverage {
    samples: Vec<Duration>,
    sum: Duration,
    count: u64,
    last: Instant,
}

impl RunningAverage {
    /// Create a running average holding up to `capacity` samples.
    ///
    /// The first sample measures from the moment of construction. The
    /// capacity is clamped to `1..=MAX_WINDOW`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::starting_at(capacity, Instant::now())
    }

    /// Create a running average whose first sample measures from `start`.
    #[must_use]
    pub fn starting_at(capacity: usize, start: Instant) -> Self {
        let capacity = capacity.clamp(1, MAX_WINDOW);
        log::trace!("Running average created with window of {capacity}");

        Self {
            samples: vec![Duration::ZERO; capacity],
            sum: Duration::ZERO,
            count: 0,
            last: start,
        }
    }

    /// Record a sample: the time elapsed since the previous sample.
    pub fn sample(&mut self) {
        self.sample_at(Instant::now());
    }

    /// Record a sample taken at `now`.
    ///
    /// A `now` earlier than the previous sample records a zero duration.
    pub fn sample_at(&mut self, now: Instant) {
        self.record(now.saturating_duration_since(self.last));
        self.last = now;
    }

    /// Record `times` samples at the same instant `now`.
    ///
    /// Equivalent to calling [`Self::sample_at`] `times` times: the first
    /// sample measures from the previous one and the rest are zero-length.
    /// Only the samples that can still be in the window are written.
    pub fn sample_many_at(&mut self, now: Instant, times: u64) {
        if times == 0 {
            return;
        }

        self.sample_at(now);

        let rest = times - 1;
        let window = self.capacity() as u64;
        for _ in 0..rest.min(window) {
            self.record(Duration::ZERO);
        }
        // Anything past a full window of zeros would only overwrite zeros.
        self.count = self.count.saturating_add(rest.saturating_sub(window));
    }

    fn record(&mut self, elapsed: Duration) {
        let slot = (self.count % self.capacity() as u64) as usize;
        let replaced = std::mem::replace(&mut self.samples[slot], elapsed);
        self.sum = self.sum.saturating_sub(replaced).saturating_add(elapsed);
        self.count = self.count.saturating_add(1);
    }

    /// Mean of the recorded samples, or zero before the first sample.
    #[must_use]
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }

        // Unwritten slots are zero and never contributed to the sum.
        let taken = self.count.min(self.capacity() as u64);

        self.sum / u32::try_from(taken).unwrap_or(u32::MAX)
    }

    /// Time elapsed since the last sample (or construction, if none).
    #[must_use]
    pub fn time_since_last_sample(&self) -> Duration {
        self.time_since_last_sample_at(Instant::now())
    }

    /// Time elapsed between the last sample and `now`.
    #[must_use]
    pub fn time_since_last_sample_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last)
    }

    /// Maximum number of samples averaged over.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Total number of samples recorded, including ones since overwritten.
    #[must_use]
    pub const fn samples_taken(&self) -> u64 {
        self.count
    }
}

impl Default for RunningAverage {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
