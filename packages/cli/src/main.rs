//! pipemeter CLI entry point.
//!
//! Copies stdin to stdout unchanged while reporting progress towards an
//! expected size on stderr.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod transfer;

use std::env;
use std::io;

use clap::Parser;

use args::Args;
use pipemeter_report::TargetSize;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // An invalid size is reported but only disables progress
    let (target, size_error) = TargetSize::from_arg(args.size_arg());
    if let Some(e) = size_error {
        output::print_error(&e.to_string());
    }

    log::debug!(
        "Target {} bytes, window {}, chunk size {}",
        target.bytes(),
        args.window,
        args.chunk_size
    );

    let copied = transfer::transfer(
        io::stdin(),
        io::stdout(),
        io::stderr(),
        target,
        args.window,
        args.chunk_size,
    )?;
    log::debug!("Copied {copied} bytes");

    Ok(())
}
