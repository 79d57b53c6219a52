//! Wiring the copier thread to the progress reporter.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{Read, Write};

use pipemeter_copy::{CopyError, spawn_copier};
use pipemeter_report::{TargetSize, run_reporter};

/// Copy `input` to `output` on a copier thread while reporting to `status`.
///
/// The reporter runs on the calling thread and returns once the copier
/// closes its channel, so a fault ends the status line before it is
/// returned here.
///
/// # Errors
///
/// * If the copier thread cannot be started
/// * If reading `input` or writing `output` fails
pub fn transfer<R, W, S>(
    input: R,
    output: W,
    status: S,
    target: TargetSize,
    window: usize,
    chunk_size: usize,
) -> Result<u64, CopyError>
where
    R: Read + Send + 'static,
    W: Write + Send + 'static,
    S: Write,
{
    let (copier, events) = spawn_copier(input, output, chunk_size)?;

    let summary = run_reporter(events, target, window, status);
    log::debug!(
        "Reporter saw {} events totalling {} bytes over {} point(s)",
        summary.events,
        summary.bytes,
        summary.samples
    );

    copier.join()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, ErrorKind};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Reader that hands out `data` and then fails.
    struct BrokenSource {
        data: Cursor<Vec<u8>>,
    }

    impl Read for BrokenSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(ErrorKind::ConnectionReset, "source reset")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_input_fault_keeps_partial_output() {
        let source = BrokenSource {
            data: Cursor::new(b"first half".to_vec()),
        };
        let output = SharedBuffer::default();
        let mut status = Vec::new();

        let err = transfer(source, output.clone(), &mut status, TargetSize::new(20), 5, 4)
            .unwrap_err();

        assert!(err.is_input());
        assert!(err.to_string().starts_with("Input error:"));
        assert_eq!(output.contents(), b"first half");

        let status = String::from_utf8(status).unwrap();
        assert!(status.contains(" 50% estimated time remaining "));
        assert!(status.ends_with('\n'));
    }

    #[test]
    fn test_transfer_copies_everything() {
        let data: Vec<u8> = (0..=255).cycle().take(5_000).collect();
        let output = SharedBuffer::default();
        let mut status = Vec::new();

        let copied = transfer(
            Cursor::new(data.clone()),
            output.clone(),
            &mut status,
            TargetSize::new(5_000),
            5,
            512,
        )
        .unwrap();

        assert_eq!(copied, 5_000);
        assert_eq!(output.contents(), data);
        let status = String::from_utf8(status).unwrap();
        assert!(status.ends_with("100% estimated time remaining 00:00:00\n"));
    }

    #[test]
    fn test_disabled_target_writes_no_status() {
        let output = SharedBuffer::default();
        let mut status = Vec::new();

        transfer(
            Cursor::new(b"quiet".to_vec()),
            output.clone(),
            &mut status,
            TargetSize::DISABLED,
            5,
            2,
        )
        .unwrap();

        assert_eq!(output.contents(), b"quiet");
        assert!(status.is_empty());
    }
}
