//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Errors that can end a copy.
///
/// Every variant is terminal: copying never resumes after one of these.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Reading the input stream failed.
    #[error("Input error: {io_error}")]
    Input {
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Writing or flushing the output stream failed.
    #[error("Output error: {io_error}")]
    Output {
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// The event receiver hung up before the input was exhausted.
    #[error("Progress reporter stopped after {bytes} bytes were copied")]
    ReporterGone {
        /// Bytes copied before the receiver went away.
        bytes: u64,
    },

    /// The copier thread could not be started.
    #[error("Failed to start copier thread: {io_error}")]
    Spawn {
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// The copier thread panicked.
    #[error("Copier thread panicked")]
    Panicked,
}

impl CopyError {
    /// Whether this fault came from the input stream.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }

    /// Whether this fault came from the output stream.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }
}
