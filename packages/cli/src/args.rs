//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use pipemeter_copy::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use pipemeter_estimate::{DEFAULT_WINDOW, MAX_WINDOW};

/// CLI arguments for pipemeter.
#[derive(Debug, Parser)]
#[command(
    name = "pipemeter",
    about = "Copy stdin to stdout, showing percentage and time remaining on stderr",
    version
)]
pub struct Args {
    /// Expected total number of bytes. Without it, data is copied silently.
    // Raw text: an unparseable size is reported without aborting the copy.
    #[arg(index = 1, value_name = "SIZE", allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Number of percentage points averaged for the time estimate.
    #[arg(long, short = 'w', value_name = "POINTS", default_value_t = DEFAULT_WINDOW, value_parser = parse_window)]
    pub window: usize,

    /// Bytes read from stdin per iteration.
    #[arg(long = "chunk-size", short = 'c', value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// The size argument, if one was given.
    #[must_use]
    pub fn size_arg(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

fn parse_window(value: &str) -> Result<usize, String> {
    parse_in_range(value, MAX_WINDOW)
}

fn parse_chunk_size(value: &str) -> Result<usize, String> {
    parse_in_range(value, MAX_CHUNK_SIZE)
}

fn parse_in_range(value: &str, max: usize) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        Ok(_) => Err(format!("must be between 1 and {max}")),
        Err(e) => Err(e.to_string()),
    }
}
