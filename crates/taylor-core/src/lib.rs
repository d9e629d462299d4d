//! Core logic for the `timew-taylor` report.
//!
//! The report is one pipeline:
//! - Source: parsing Timewarrior's extension input into intervals
//! - Common tags: finding tags present on every interval
//! - Aggregation: summing durations per remaining tag set
//! - Rendering: duration strings and proportional bars

mod aggregate;
pub mod bar;
mod common;
pub mod duration;
mod interval;
pub mod source;

pub use aggregate::{AggregateEntry, Summary, aggregate};
pub use bar::render_bar;
pub use common::find_common_tags;
pub use duration::{hms, hours_decimal, split_hms};
pub use interval::{Interval, TagKey};
pub use source::{Export, SourceError, parse_export};
