//! Progress reporting for pipemeter.
//!
//! This crate turns the stream of byte counts produced by the copier into a
//! single, continuously redrawn status line:
//!
//! * Target size parsing, with zero meaning "progress disabled"
//! * Percentage tracking with one estimator sample per point crossed
//! * Time-remaining projection from a running average
//! * In-place status line rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use pipemeter_report::{TargetSize, run_reporter};
//!
//! let (target, error) = TargetSize::from_arg(Some("1048576"));
//! let summary = run_reporter(events, target, 5, std::io::stderr());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod line;
mod reporter;
mod size;
mod state;

pub use error::SizeError;
pub use line::StatusLine;
pub use reporter::{ReportSummary, run_reporter};
pub use size::{Percentage, TargetSize};
pub use state::{ProgressState, Status};
