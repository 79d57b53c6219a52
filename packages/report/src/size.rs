//! Expected transfer size and the percentage derived from it.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::num::NonZeroU64;

use crate::error::SizeError;

/// Total number of bytes the transfer is expected to carry.
///
/// Zero means the size is unknown and progress reporting is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetSize(u64);

impl TargetSize {
    /// A size that disables progress reporting.
    pub const DISABLED: Self = Self(0);

    /// Create a target size of `bytes`.
    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Parse a size given as an unsigned decimal integer.
    ///
    /// # Errors
    ///
    /// * If `value` is not a valid `u64`
    pub fn parse(value: &str) -> Result<Self, SizeError> {
        value
            .parse::<u64>()
            .map(Self)
            .map_err(|e| SizeError::Invalid {
                value: value.to_string(),
                source: e,
            })
    }

    /// Resolve the optional size argument.
    ///
    /// A missing argument disables progress. An invalid one also disables
    /// progress, and the parse error is handed back for the caller to report.
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> (Self, Option<SizeError>) {
        match arg.map(Self::parse) {
            None => (Self::DISABLED, None),
            Some(Ok(size)) => (size, None),
            Some(Err(e)) => (Self::DISABLED, Some(e)),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Whether progress reporting is disabled.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        self.0 == 0
    }

    /// The size as a non-zero divisor, or `None` when disabled.
    #[must_use]
    pub const fn enabled(self) -> Option<NonZeroU64> {
        NonZeroU64::new(self.0)
    }
}

/// Whole percentage of the target copied so far.
///
/// Rounded down and never clamped: copying more than the target yields
/// values above 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(u64);

impl Percentage {
    /// Percentage of `target` that `total` bytes represent.
    #[must_use]
    pub fn of(total: u64, target: NonZeroU64) -> Self {
        let percent = u128::from(total) * 100 / u128::from(target.get());
        Self(u64::try_from(percent).unwrap_or(u64::MAX))
    }

    /// The percentage as an integer.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
