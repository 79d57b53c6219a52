//! The reporting loop fed by copier events.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::num::NonZeroU64;

use pipemeter_copy::ByteEvent;

use crate::line::StatusLine;
use crate::size::TargetSize;
use crate::state::ProgressState;

/// Totals observed by a finished reporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of events consumed.
    pub events: u64,
    /// Sum of all event byte counts.
    pub bytes: u64,
    /// Final percentage, or `None` when progress was disabled.
    pub percent: Option<u64>,
    /// Estimator samples taken, one per percentage point crossed.
    pub samples: u64,
}

/// Consume `events` until they run out, drawing progress to `out`.
///
/// With a disabled target the events are drained and nothing is written.
/// Otherwise every event redraws the status line, and the line is
/// terminated once the events end. A failure to draw is logged and stops
/// further drawing, but events are still consumed so the copy can finish.
pub fn run_reporter<I, W>(events: I, target: TargetSize, window: usize, out: W) -> ReportSummary
where
    I: IntoIterator<Item = ByteEvent>,
    W: Write,
{
    match target.enabled() {
        None => {
            log::debug!("No target size, draining without progress");
            drain(events)
        }
        Some(target) => {
            log::debug!("Reporting progress towards {target} bytes");
            report(events, target, window, out)
        }
    }
}

fn drain<I>(events: I) -> ReportSummary
where
    I: IntoIterator<Item = ByteEvent>,
{
    let mut summary = ReportSummary::default();

    for bytes in events {
        summary.events += 1;
        summary.bytes = summary.bytes.saturating_add(bytes as u64);
    }

    summary
}

fn report<I, W>(events: I, target: NonZeroU64, window: usize, out: W) -> ReportSummary
where
    I: IntoIterator<Item = ByteEvent>,
    W: Write,
{
    let mut state = ProgressState::new(target, window);
    let mut line = Some(StatusLine::new(out));
    let mut summary = ReportSummary::default();

    for bytes in events {
        summary.events += 1;
        let status = state.advance(bytes as u64);

        let Some(current) = line.as_mut() else {
            continue;
        };
        if let Err(e) = current.draw(&status) {
            log::warn!("Failed to draw progress, continuing without it: {e}");
            line = None;
        }
    }

    if let Some(mut current) = line {
        if let Err(e) = current.finish() {
            log::warn!("Failed to finish progress line: {e}");
        }
    }

    summary.bytes = state.total();
    summary.percent = Some(state.percent().value());
    summary.samples = state.estimator().samples_taken();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::mpsc::sync_channel;
    use std::thread;

    /// Writer that rejects everything.
    struct ClosedWriter {
        attempts: usize,
    }

    impl Write for ClosedWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stderr closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines_of(output: &[u8]) -> Vec<String> {
        let text = String::from_utf8(output.to_vec()).unwrap();
        assert!(text.ends_with('\n'));
        text.trim_end_matches('\n')
            .split('\r')
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_disabled_target_drains_silently() {
        let mut out = Vec::new();

        let summary = run_reporter(vec![10, 20, 30], TargetSize::DISABLED, 5, &mut out);

        assert!(out.is_empty());
        assert_eq!(
            summary,
            ReportSummary {
                events: 3,
                bytes: 60,
                percent: None,
                samples: 0,
            }
        );
    }

    #[test]
    fn test_reports_each_event() {
        let mut out = Vec::new();

        let summary = run_reporter(vec![0, 25, 25, 50], TargetSize::new(100), 5, &mut out);

        let lines = lines_of(&out);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  0% estimated time remaining --:--:--");
        assert!(lines[1].starts_with(" 25% estimated time remaining "));
        assert!(lines[2].starts_with(" 50% estimated time remaining "));
        assert_eq!(lines[3], "100% estimated time remaining 00:00:00");
        assert_eq!(summary.percent, Some(100));
        assert_eq!(summary.bytes, 100);
        assert_eq!(summary.samples, 100);
    }

    #[test]
    fn test_time_field_is_formatted() {
        let mut out = Vec::new();

        run_reporter(vec![1, 1, 1], TargetSize::new(10), 5, &mut out);

        for line in lines_of(&out) {
            let (_, time) = line.rsplit_once(' ').unwrap();
            let fields: Vec<&str> = time.split(':').collect();
            assert_eq!(fields.len(), 3, "{line}");
            assert!(fields.iter().all(|f| f.len() >= 2 && f.chars().all(|c| c.is_ascii_digit())));
        }
    }

    #[test]
    fn test_empty_transfer_still_ends_line() {
        let mut out = Vec::new();

        let summary = run_reporter(Vec::new(), TargetSize::new(100), 5, &mut out);

        assert_eq!(out, b"\n");
        assert_eq!(summary.events, 0);
        assert_eq!(summary.percent, Some(0));
    }

    #[test]
    fn test_percentages_never_decrease() {
        let mut out = Vec::new();

        run_reporter(vec![3, 0, 17, 1, 40, 9, 30], TargetSize::new(100), 5, &mut out);

        let percents: Vec<u64> = lines_of(&out)
            .iter()
            .map(|line| line.trim_start().split('%').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(percents, vec![3, 3, 20, 21, 61, 70, 100]);
    }

    #[test]
    fn test_draw_failure_keeps_consuming() {
        let mut out = ClosedWriter { attempts: 0 };

        let summary = run_reporter(vec![1, 2, 3, 4], TargetSize::new(10), 5, &mut out);

        assert_eq!(out.attempts, 1);
        assert_eq!(summary.events, 4);
        assert_eq!(summary.bytes, 10);
    }

    #[test]
    fn test_consumes_channel_until_closed() {
        let (sender, receiver) = sync_channel(1);

        let producer = thread::spawn(move || {
            for _ in 0..200 {
                sender.send(5).unwrap();
            }
        });

        let mut out = Vec::new();
        let summary = run_reporter(receiver, TargetSize::new(1000), 5, &mut out);
        producer.join().unwrap();

        assert_eq!(summary.events, 200);
        assert_eq!(summary.bytes, 1000);
        assert_eq!(summary.percent, Some(100));
        assert_eq!(lines_of(&out).len(), 200);
    }
}
