//! Interval and tag-key types.

use std::collections::BTreeSet;
use std::fmt;

/// One recorded time span with its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Tags attached to the interval. Duplicates collapse.
    pub tags: BTreeSet<String>,
    /// Length of the interval in whole seconds.
    pub duration_secs: u64,
}

impl Interval {
    pub fn new<I, S>(tags: I, duration_secs: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            duration_secs,
        }
    }
}

/// Canonical, order-independent form of a tag set.
///
/// Holds the tags sorted and deduplicated, so two intervals carrying the same
/// tags in any order produce equal keys. The empty key is valid and stands for
/// intervals that only had common tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagKey(Vec<String>);

impl TagKey {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        Self(set.into_iter().collect())
    }

    /// Returns the tags in sorted order.
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-joined tags with embedded commas turned into spaces, so the
    /// result is safe to place in a comma-delimited column.
    pub fn label(&self) -> String {
        self.0
            .iter()
            .map(|tag| tag.replace(',', " "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for TagKey {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
