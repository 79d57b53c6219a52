//! Single-line status output redrawn in place.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};

use crate::state::Status;

/// A status line that is overwritten on every draw.
///
/// Each draw returns the cursor to the start of the line with a carriage
/// return, so only one status is ever visible. [`StatusLine::finish`] ends
/// the line.
#[derive(Debug)]
pub struct StatusLine<W: Write> {
    out: W,
}

impl<W: Write> StatusLine<W> {
    /// Create a status line writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Replace the current line with `status`.
    ///
    /// # Errors
    ///
    /// * If writing or flushing the output fails
    pub fn draw(&mut self, status: &Status) -> io::Result<()> {
        write!(self.out, "\r{status}")?;
        self.out.flush()
    }

    /// Terminate the line.
    ///
    /// # Errors
    ///
    /// * If writing or flushing the output fails
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_draw_overwrites_line() {
        let mut line = StatusLine::new(Vec::new());

        line.draw(&Status::Starting).unwrap();
        line.draw(&Status::Remaining {
            percent: 7,
            remaining: Duration::from_secs(65),
        })
        .unwrap();
        line.finish().unwrap();

        let text = String::from_utf8(line.into_inner()).unwrap();
        assert_eq!(
            text,
            "\r  0% estimated time remaining --:--:--\r  7% estimated time remaining 00:01:05\n"
        );
    }

    #[test]
    fn test_finish_without_draw_writes_line_break() {
        let mut line = StatusLine::new(Vec::new());

        line.finish().unwrap();

        assert_eq!(line.into_inner(), b"\n");
    }
}
