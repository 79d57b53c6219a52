//! Running-average time estimation for pipemeter.
//!
//! This crate tracks how long it takes a transfer to advance by one unit of
//! progress (one percentage point in practice) and smooths that over a small
//! fixed window so a single slow or fast burst of I/O does not swing the
//! projected time remaining.
//!
//! # Example
//!
//! ```rust,ignore
//! use pipemeter_estimate::RunningAverage;
//!
//! let mut average = RunningAverage::new(5);
//!
//! // Record one sample per percentage point crossed
//! average.sample();
//!
//! let remaining = (average.average() * 99).saturating_sub(average.time_since_last_sample());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod average;

pub use average::{DEFAULT_WINDOW, MAX_WINDOW, RunningAverage};
