//! Summing interval durations per distinguishing tag set.
//!
//! Tags shared by every interval say nothing about how time was split, so they
//! are stripped before grouping. What remains of each interval's tag set
//! becomes its [`TagKey`]; intervals with equal keys share one group.

use std::collections::{BTreeSet, HashMap};

use crate::common::find_common_tags;
use crate::interval::{Interval, TagKey};

/// Total time recorded under one tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    /// The tag set, common tags removed.
    pub key: TagKey,
    /// Sum of member interval durations in seconds.
    pub total_secs: u64,
}

/// Groups `intervals` by their tags minus `common_tags`.
///
/// Groups come back in the order their key was first seen. Removing a common
/// tag an interval doesn't carry is a no-op.
pub fn aggregate(intervals: &[Interval], common_tags: &BTreeSet<String>) -> Vec<AggregateEntry> {
    let mut groups: Vec<AggregateEntry> = Vec::new();
    let mut index: HashMap<TagKey, usize> = HashMap::new();

    for interval in intervals {
        let key: TagKey = interval.tags.difference(common_tags).cloned().collect();
        if let Some(&slot) = index.get(&key) {
            groups[slot].total_secs += interval.duration_secs;
        } else {
            index.insert(key.clone(), groups.len());
            groups.push(AggregateEntry {
                key,
                total_secs: interval.duration_secs,
            });
        }
    }

    tracing::debug!(groups = groups.len(), "aggregated intervals");
    groups
}

/// Result of running common-tag detection and aggregation over one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub common_tags: BTreeSet<String>,
    /// Groups in first-seen order.
    pub groups: Vec<AggregateEntry>,
}

impl Summary {
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        let common_tags = find_common_tags(intervals);
        let groups = aggregate(intervals, &common_tags);
        Self {
            common_tags,
            groups,
        }
    }

    /// Sum over all groups, equal to the sum over all intervals.
    pub fn total_secs(&self) -> u64 {
        self.groups.iter().map(|g| g.total_secs).sum()
    }

    /// Largest single group total, `None` without groups.
    pub fn max_secs(&self) -> Option<u64> {
        self.groups.iter().map(|g| g.total_secs).max()
    }

    /// Groups ordered by descending total; equal totals keep first-seen order.
    pub fn ranked(&self) -> Vec<&AggregateEntry> {
        let mut ranked: Vec<&AggregateEntry> = self.groups.iter().collect();
        ranked.sort_by_key(|g| std::cmp::Reverse(g.total_secs));
        ranked
    }
}
