//! Reading Timewarrior's extension input.
//!
//! Timewarrior hands report extensions a block of `key: value` configuration
//! lines, a blank line, and then a JSON array of intervals:
//!
//! ```text
//! temp.report.start: 20240101T000000Z
//! debug: off
//!
//! [
//! {"id":2,"start":"20240101T080000Z","end":"20240101T090000Z","tags":["a","b"]},
//! {"id":1,"start":"20240101T100000Z","tags":["a"]}
//! ]
//! ```
//!
//! An interval without `end` is still running and is measured up to the
//! reference time supplied by the caller.

use std::collections::BTreeMap;
use std::io::BufRead;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::interval::Interval;

/// Timestamp layout used in the interval JSON.
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Errors raised while turning the input stream into intervals.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration line {line}: {text:?}")]
    Header { line: usize, text: String },

    #[error("invalid interval JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp: {value:?}")]
    Timestamp { value: String },

    #[error("interval {index} ends before it starts")]
    NegativeDuration { index: usize },
}

/// Parsed extension input: the configuration header plus all intervals.
#[derive(Debug, Clone, Default)]
pub struct Export {
    pub config: BTreeMap<String, String>,
    pub intervals: Vec<Interval>,
    /// Number of intervals without an end, measured up to the reference time.
    pub open_intervals: usize,
}

impl Export {
    /// Whether Timewarrior was asked to run with debug output.
    pub fn debug_enabled(&self) -> bool {
        self.config
            .get("debug")
            .is_some_and(|v| matches!(v.as_str(), "on" | "yes" | "true" | "1"))
    }
}

#[derive(Debug, Deserialize)]
struct RawInterval {
    start: String,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Reads an entire extension input stream.
///
/// `now` closes any interval that is still open.
pub fn parse_export<R: BufRead>(reader: R, now: DateTime<Utc>) -> Result<Export, SourceError> {
    let mut config = BTreeMap::new();
    let mut body = String::new();
    let mut in_header = true;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !in_header {
            body.push_str(&line);
            body.push('\n');
            continue;
        }
        if line.trim().is_empty() {
            in_header = false;
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return Err(SourceError::Header {
                line: idx + 1,
                text: line,
            });
        };
        config.insert(key.trim().to_string(), value.trim().to_string());
    }

    let raw: Vec<RawInterval> = if body.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&body)?
    };
    let open_intervals = raw.iter().filter(|r| r.end.is_none()).count();
    let intervals: Vec<Interval> = raw
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_interval(index, now))
        .collect::<Result<_, _>>()?;

    Ok(Export {
        config,
        intervals,
        open_intervals,
    })
}

impl RawInterval {
    fn into_interval(self, index: usize, now: DateTime<Utc>) -> Result<Interval, SourceError> {
        let start = parse_timestamp(&self.start)?;
        let end = match self.end.as_deref() {
            Some(end) => parse_timestamp(end)?,
            None => {
                tracing::debug!(index, "interval still open, measuring up to now");
                now
            }
        };

        let duration_secs = u64::try_from((end - start).num_seconds())
            .map_err(|_| SourceError::NegativeDuration { index })?;

        Ok(Interval::new(self.tags, duration_secs))
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SourceError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| SourceError::Timestamp {
            value: value.to_string(),
        })
}
