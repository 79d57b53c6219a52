//! Chunked copy loop and the copier thread.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{ErrorKind, Read, Write};
use std::thread::{self, JoinHandle};

use crate::channel::{EventReceiver, EventSender, event_channel};
use crate::error::CopyError;

/// Bytes read from the input per iteration unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Largest chunk the copier will allocate.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

const COPIER_THREAD_NAME: &str = "pipemeter-copier";

/// Copy `input` to `output` in chunks, emitting one event per chunk written.
///
/// Each chunk is written in full before its byte count is sent on `events`.
/// Sending blocks while the previous event is still unconsumed. The sender
/// is dropped on return, closing the channel.
///
/// # Arguments
///
/// * `input` - Source stream, read until end-of-stream
/// * `output` - Destination stream, flushed once the input is exhausted
/// * `chunk_size` - Maximum bytes per read, clamped to `1..=MAX_CHUNK_SIZE`
/// * `events` - Channel receiving the byte count of every chunk written
///
/// # Errors
///
/// * If reading the input fails (interrupted reads are retried)
/// * If writing or flushing the output fails
/// * If the event receiver has been dropped
pub fn copy_stream<R, W>(
    mut input: R,
    mut output: W,
    chunk_size: usize,
    events: EventSender,
) -> Result<u64, CopyError>
where
    R: Read,
    W: Write,
{
    let mut buffer = vec![0u8; chunk_size.clamp(1, MAX_CHUNK_SIZE)];
    let mut copied: u64 = 0;

    log::debug!("Copying with {} byte chunks", buffer.len());

    loop {
        let n = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                // Keep what was already copied; the input fault is what gets reported
                if let Err(flush_error) = output.flush() {
                    log::debug!("Flush after input fault failed: {flush_error}");
                }
                return Err(CopyError::Input { io_error: e });
            }
        };

        output
            .write_all(&buffer[..n])
            .map_err(|e| CopyError::Output { io_error: e })?;
        copied += n as u64;

        log::trace!("Copied {n} bytes ({copied} total)");

        events
            .send(n)
            .map_err(|_| CopyError::ReporterGone { bytes: copied })?;
    }

    output
        .flush()
        .map_err(|e| CopyError::Output { io_error: e })?;

    log::debug!("Reached end of input after {copied} bytes");

    Ok(copied)
}

/// Handle to a copier running on its own thread.
#[derive(Debug)]
pub struct CopierHandle {
    thread: JoinHandle<Result<u64, CopyError>>,
}

impl CopierHandle {
    /// Wait for the copier to finish and return the number of bytes copied.
    ///
    /// # Errors
    ///
    /// * If the copy failed
    /// * If the copier thread panicked
    pub fn join(self) -> Result<u64, CopyError> {
        self.thread.join().map_err(|_| CopyError::Panicked)?
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }
}

/// Start copying `input` to `output` on a dedicated thread.
///
/// Returns the copier handle and the receiving end of its event channel.
/// The channel closes when the copier returns, successfully or not.
///
/// # Errors
///
/// * If the thread cannot be spawned
pub fn spawn_copier<R, W>(
    input: R,
    output: W,
    chunk_size: usize,
) -> Result<(CopierHandle, EventReceiver), CopyError>
where
    R: Read + Send + 'static,
    W: Write + Send + 'static,
{
    let (sender, receiver) = event_channel();

    let thread = thread::Builder::new()
        .name(COPIER_THREAD_NAME.to_string())
        .spawn(move || copy_stream(input, output, chunk_size, sender))
        .map_err(|e| CopyError::Spawn { io_error: e })?;

    Ok((CopierHandle { thread }, receiver))
}
