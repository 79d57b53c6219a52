//! Cumulative progress and time-remaining projection.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::num::NonZeroU64;
use std::time::{Duration, Instant};

use pipemeter_estimate::RunningAverage;

use crate::size::Percentage;

/// What the status line should show after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing measurable yet: still below one percent.
    Starting,
    /// Progress with a projected time remaining.
    Remaining {
        /// Whole percentage copied.
        percent: u64,
        /// Projected time until completion.
        remaining: Duration,
    },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting => write!(f, "{:>3}% estimated time remaining --:--:--", 0),
            Self::Remaining { percent, remaining } => {
                let secs = remaining.as_secs();
                write!(
                    f,
                    "{percent:>3}% estimated time remaining {:02}:{:02}:{:02}",
                    secs / 3600,
                    secs % 3600 / 60,
                    secs % 60
                )
            }
        }
    }
}

/// Running totals for a transfer with a known size.
///
/// Owned by the reporting side only. Each update adds a byte count, samples
/// the estimator once for every percentage point crossed, and projects the
/// time remaining.
#[derive(Debug, Clone)]
pub struct ProgressState {
    target: NonZeroU64,
    total: u64,
    percent: Percentage,
    estimator: RunningAverage,
}

impl ProgressState {
    /// Start tracking a transfer of `target` bytes.
    #[must_use]
    pub fn new(target: NonZeroU64, window: usize) -> Self {
        Self::starting_at(target, window, Instant::now())
    }

    /// Start tracking a transfer of `target` bytes that began at `start`.
    #[must_use]
    pub fn starting_at(target: NonZeroU64, window: usize, start: Instant) -> Self {
        Self {
            target,
            total: 0,
            percent: Percentage::default(),
            estimator: RunningAverage::starting_at(window, start),
        }
    }

    /// Record `bytes` more copied and return the status to display.
    pub fn advance(&mut self, bytes: u64) -> Status {
        self.advance_at(bytes, Instant::now())
    }

    /// Record `bytes` more copied at `now` and return the status to display.
    pub fn advance_at(&mut self, bytes: u64, now: Instant) -> Status {
        self.total = self.total.saturating_add(bytes);

        let percent = Percentage::of(self.total, self.target);
        let crossed = percent.value().saturating_sub(self.percent.value());
        if crossed > 0 {
            log::trace!("Crossed {crossed} point(s), now at {percent}");
            self.estimator.sample_many_at(now, crossed);
            self.percent = percent;
        }

        if percent.value() == 0 {
            return Status::Starting;
        }

        Status::Remaining {
            percent: percent.value(),
            remaining: self.remaining_at(now),
        }
    }

    /// Projected time until the transfer reaches 100 percent.
    ///
    /// The time already spent in the current point is subtracted so the
    /// projection counts down smoothly between crossings. Never negative.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        let points_left = 100u64.saturating_sub(self.percent.value());
        let points_left = u32::try_from(points_left).unwrap_or(u32::MAX);

        self.estimator
            .average()
            .saturating_mul(points_left)
            .saturating_sub(self.estimator.time_since_last_sample_at(now))
    }

    /// Bytes copied so far.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Percentage copied so far.
    #[must_use]
    pub const fn percent(&self) -> Percentage {
        self.percent
    }

    /// The estimator driven by percentage crossings.
    #[must_use]
    pub const fn estimator(&self) -> &RunningAverage {
        &self.estimator
    }
}
