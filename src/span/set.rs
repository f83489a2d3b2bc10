//! Ordered span sets
//!
//! Iteration is ascending by (start, end) so that reports and crossing
//! scans are reproducible. Duplicate spans collapse.

use std::collections::btree_set::{self, BTreeSet};
use std::fmt;

use super::Span;

/// Set of constituent spans, ascending by (start, end)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanSet {
    spans: BTreeSet<Span>,
}

impl SpanSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            spans: BTreeSet::new(),
        }
    }

    /// Insert a span; returns false if it was already present
    pub fn insert(&mut self, span: Span) -> bool {
        self.spans.insert(span)
    }

    /// Membership test
    pub fn contains(&self, span: &Span) -> bool {
        self.spans.contains(span)
    }

    /// Number of distinct spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the set holds no spans
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate ascending by (start, end)
    pub fn iter(&self) -> btree_set::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Widest span (smallest start, then largest end).
    ///
    /// For a reconstructed tree this is the root.
    pub fn widest(&self) -> Option<Span> {
        self.spans.iter().copied().max_by(|a, b| {
            a.len()
                .cmp(&b.len())
                .then_with(|| b.start.cmp(&a.start))
        })
    }

    /// Number of spans present in both sets
    pub fn matched(&self, other: &SpanSet) -> usize {
        self.spans.intersection(&other.spans).count()
    }

    /// BLAKE3 fingerprint over the ascending span list
    pub fn fingerprint(&self) -> SpanFingerprint {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.spans.len() as u64).to_le_bytes());
        for span in &self.spans {
            hasher.update(&(span.start as u64).to_le_bytes());
            hasher.update(&(span.end as u64).to_le_bytes());
        }
        SpanFingerprint(hasher.finalize())
    }
}

impl FromIterator<Span> for SpanSet {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

impl Extend<Span> for SpanSet {
    fn extend<I: IntoIterator<Item = Span>>(&mut self, iter: I) {
        self.spans.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SpanSet {
    type Item = &'a Span;
    type IntoIter = btree_set::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl IntoIterator for SpanSet {
    type Item = Span;
    type IntoIter = btree_set::IntoIter<Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl fmt::Display for SpanSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", span)?;
        }
        write!(f, "}}")
    }
}

/// Content hash of a span set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanFingerprint(blake3::Hash);

impl SpanFingerprint {
    /// First 12 hex digits, enough to tell trees apart in a report
    pub fn short(&self) -> String {
        let hex = self.0.to_hex();
        hex.as_str()[..12].to_string()
    }
}

impl fmt::Display for SpanFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(spans: &[(usize, usize)]) -> SpanSet {
        spans.iter().copied().map(Span::from).collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut spans = SpanSet::new();
        assert!(spans.insert(Span::new(0, 2)));
        assert!(!spans.insert(Span::new(0, 2)));
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_ascending_iteration() {
        let spans = set(&[(1, 4), (0, 4), (0, 2), (2, 4)]);
        let order: Vec<_> = spans.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(order, vec![(0, 2), (0, 4), (1, 4), (2, 4)]);
        assert_eq!(spans.to_string(), "{(0, 2), (0, 4), (1, 4), (2, 4)}");
    }

    #[test]
    fn test_widest_is_root() {
        let spans = set(&[(0, 2), (0, 3), (0, 4)]);
        assert_eq!(spans.widest(), Some(Span::new(0, 4)));
        assert_eq!(SpanSet::new().widest(), None);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = set(&[(0, 2), (0, 4)]);
        let b = set(&[(0, 4), (0, 2)]);
        let c = set(&[(2, 4), (0, 4)]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().short().len(), 12);
    }

    #[test]
    fn test_matched() {
        let a = set(&[(0, 2), (0, 4)]);
        let b = set(&[(2, 4), (0, 4)]);
        assert_eq!(a.matched(&b), 1);
        assert_eq!(a.matched(&a), 2);
    }
}
