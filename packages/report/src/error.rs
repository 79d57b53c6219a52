//! Error types for progress reporting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while reading the expected transfer size.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The size is not an unsigned decimal integer.
    #[error("Invalid size: {source}")]
    Invalid {
        /// The rejected argument.
        value: String,
        /// The underlying parse error.
        #[source]
        source: ParseIntError,
    },
}
