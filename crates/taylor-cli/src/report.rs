//! Report printer.
//!
//! Output is meant for a table formatter such as `csvlook`: a header line with
//! the common tags and total hours, then one `tags, H:MM:SS,bar` line per tag
//! set, largest first.

use std::fmt::{self, Write};
use std::io;

use anyhow::{Context, Result};
use taylor_core::{AggregateEntry, Export, Summary, TagKey, hms, hours_decimal, render_bar};
use thiserror::Error;

use crate::Config;

/// Errors that prevent a report from being produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Nothing to aggregate, so there is no largest group to scale bars by.
    #[error("no intervals in input, nothing to report")]
    EmptyInput,
}

/// One rendered row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub tags: String,
    pub duration: String,
    pub bar: String,
}

impl ReportLine {
    /// Builds the row for `entry`, scaling its bar against `max_secs`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(entry: &AggregateEntry, max_secs: u64, config: &Config) -> Self {
        let fraction = if max_secs == 0 {
            0.0
        } else {
            entry.total_secs as f64 / max_secs as f64
        };

        Self {
            tags: entry.key.label().chars().take(config.tag_width).collect(),
            duration: hms(entry.total_secs),
            bar: render_bar(config.bar_width, fraction),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {},{}", self.tags, self.duration, self.bar)
    }
}

/// Formats the header line (without trailing newline).
///
/// Common tags get the same comma replacement as the group column.
pub fn format_header(summary: &Summary) -> String {
    let common = summary.common_tags.iter().cloned().collect::<TagKey>().label();
    format!(
        "{common} - total hours {}, HH:MM:SS, ",
        hours_decimal(summary.total_secs())
    )
}

/// Formats the complete report.
///
/// Fails with [`ReportError::EmptyInput`] when there are no groups. When every
/// group totals zero seconds all bars are empty.
pub fn format_report(summary: &Summary, config: &Config) -> Result<String, ReportError> {
    let max_secs = summary.max_secs().ok_or(ReportError::EmptyInput)?;

    let mut output = String::new();
    writeln!(output, "{}", format_header(summary)).unwrap();
    for entry in summary.ranked() {
        writeln!(output, "{}", ReportLine::new(entry, max_secs, config)).unwrap();
    }
    Ok(output)
}

// ========== Public Interface ==========

/// Runs the report over a parsed export and writes it to `out`.
///
/// The whole report is formatted before anything is written.
pub fn run<W: io::Write>(export: &Export, config: &Config, out: &mut W) -> Result<()> {
    let summary = Summary::from_intervals(&export.intervals);
    tracing::debug!(
        intervals = export.intervals.len(),
        common_tags = summary.common_tags.len(),
        groups = summary.groups.len(),
        total_secs = summary.total_secs(),
        "summarized intervals"
    );

    let report = format_report(&summary, config)?;
    out.write_all(report.as_bytes())
        .context("failed to write report")?;
    out.flush().context("failed to flush report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use taylor_core::Interval;

    fn summary(intervals: &[Interval]) -> Summary {
        Summary::from_intervals(intervals)
    }

    #[test]
    fn test_report_two_groups() {
        let s = summary(&[
            Interval::new(["A", "B"], 3600),
            Interval::new(["A", "C"], 1800),
        ]);
        let output = format_report(&s, &Config::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_debug_snapshot!(lines, @r#"
        [
            "A - total hours 1.50, HH:MM:SS, ",
            "B,    1:00:00,██████████",
            "C,    0:30:00,█████     ",
        ]
        "#);
    }

    #[test]
    fn test_header_without_common_tags() {
        let s = summary(&[Interval::new(["x"], 5400), Interval::new(["y"], 1800)]);
        assert_eq!(format_header(&s), " - total hours 2.00, HH:MM:SS, ");
    }

    #[test]
    fn test_header_joins_common_tags() {
        let s = summary(&[
            Interval::new(["client", "billable", "a"], 60),
            Interval::new(["client", "billable", "b"], 60),
        ]);
        assert!(format_header(&s).starts_with("billable client - total hours"));
    }

    #[test]
    fn test_header_common_tags_are_comma_free() {
        let s = summary(&[
            Interval::new(["Smith, John", "a"], 60),
            Interval::new(["Smith, John", "b"], 60),
        ]);
        let header = format_header(&s);
        assert_eq!(header, "Smith  John - total hours 0.03, HH:MM:SS, ");
        assert_eq!(header.matches(',').count(), 2);
    }

    #[test]
    fn test_only_common_tags_get_empty_row() {
        let s = summary(&[Interval::new(["A"], 600), Interval::new(["A", "B"], 1200)]);
        let output = format_report(&s, &Config::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "B,    0:20:00,██████████");
        assert_eq!(lines[2], ",    0:10:00,█████     ");
    }

    #[test]
    fn test_tags_truncated_and_comma_free() {
        let long = "x".repeat(80);
        let entry = AggregateEntry {
            key: TagKey::new([long.as_str(), "a,b"]),
            total_secs: 60,
        };
        let line = ReportLine::new(&entry, 60, &Config::default());
        assert_eq!(line.tags.chars().count(), 60);
        assert!(line.tags.starts_with("a b x"));
        assert!(!line.tags.contains(','));
        assert_eq!(line.bar, "██████████");
    }

    #[test]
    fn test_equal_totals_are_stable() {
        let s = summary(&[
            Interval::new(["first"], 100),
            Interval::new(["second"], 100),
        ]);
        let a = format_report(&s, &Config::default()).unwrap();
        let b = format_report(&s, &Config::default()).unwrap();
        assert_eq!(a, b);
        let lines: Vec<&str> = a.lines().collect();
        assert!(lines[1].starts_with("first,"));
        assert!(lines[2].starts_with("second,"));
    }

    #[test]
    fn test_zero_intervals_is_an_error() {
        let s = summary(&[]);
        assert_eq!(
            format_report(&s, &Config::default()),
            Err(ReportError::EmptyInput)
        );
    }

    #[test]
    fn test_all_zero_durations_render_empty_bars() {
        let s = summary(&[Interval::new(["a"], 0), Interval::new(["b"], 0)]);
        let output = format_report(&s, &Config::default()).unwrap();
        for line in output.lines().skip(1) {
            assert!(line.ends_with(&" ".repeat(10)), "{line:?}");
        }
    }

    #[test]
    fn test_custom_widths() {
        let config = Config {
            bar_width: 4,
            tag_width: 3,
        };
        let s = summary(&[
            Interval::new(["common", "abcdef"], 7200),
            Interval::new(["common", "z"], 3600),
        ]);
        let output = format_report(&s, &config).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "abc,    2:00:00,████");
        assert_eq!(lines[2], "z,    1:00:00,██  ");
    }

    #[test]
    fn test_run_writes_nothing_on_error() {
        let mut out = Vec::new();
        let err = run(&Export::default(), &Config::default(), &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(
            err.downcast_ref::<ReportError>(),
            Some(&ReportError::EmptyInput)
        );
    }
}
