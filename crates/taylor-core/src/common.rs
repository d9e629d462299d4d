//! Detection of tags shared by every interval.

use std::collections::{BTreeSet, HashMap};

use crate::interval::Interval;

/// Returns the tags that appear in every one of `intervals`.
///
/// A tag missing from a single interval is excluded. No intervals means no
/// common tags.
pub fn find_common_tags(intervals: &[Interval]) -> BTreeSet<String> {
    let n = intervals.len();
    if n == 0 {
        return BTreeSet::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for interval in intervals {
        for tag in &interval.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let common: BTreeSet<String> = counts
        .into_iter()
        .filter(|&(_, count)| count == n)
        .map(|(tag, _)| tag.to_string())
        .collect();

    tracing::debug!(intervals = n, common = ?common, "found common tags");
    common
}
