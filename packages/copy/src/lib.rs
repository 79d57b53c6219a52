//! Chunked stream copying with byte-count events.
//!
//! This crate provides the copying half of pipemeter:
//!
//! * Byte-for-byte relaying from any `Read` to any `Write`
//! * One `ByteEvent` per chunk written, sent over a capacity-1 channel
//! * Backpressure: the copier waits until the previous event is consumed
//! * Typed input/output faults for the caller to report
//!
//! # Example
//!
//! ```rust,ignore
//! use pipemeter_copy::{DEFAULT_CHUNK_SIZE, spawn_copier};
//!
//! let (copier, events) = spawn_copier(std::io::stdin(), std::io::stdout(), DEFAULT_CHUNK_SIZE)?;
//!
//! for bytes in events {
//!     eprintln!("copied {bytes} bytes");
//! }
//!
//! let total = copier.join()?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod channel;
mod copy;
mod error;

pub use channel::{ByteEvent, EventReceiver, EventSender, event_channel};
pub use copy::{CopierHandle, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, copy_stream, spawn_copier};
pub use error::CopyError;
