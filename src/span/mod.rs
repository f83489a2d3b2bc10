//! Constituent spans over leaf positions
//!
//! A binary tree over n leaves is never stored as nodes. It is represented
//! by the set of half-open intervals [start, end) its internal nodes cover.
//! Two trees over the same leaves are equal iff their span sets are equal.

mod set;

pub use set::{SpanFingerprint, SpanSet};

use std::fmt;

/// Half-open interval [start, end) of leaf indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First leaf covered (inclusive)
    pub start: usize,

    /// One past the last leaf covered (exclusive)
    pub end: usize,
}

impl Span {
    /// Create span [start, end)
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "Span must cover at least one leaf");
        Self { start, end }
    }

    /// Unit span covering the single leaf at `index`
    pub fn unit(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Check if unit span (single leaf)
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.end == self.start + 1
    }

    /// Number of leaves covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Split point used by balanced bracketing.
    ///
    /// The left part receives ⌈len / 2⌉ leaves.
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.start + (self.len() + 1) / 2
    }

    /// Children via midpoint split: ([start, mid), [mid, end))
    pub fn halves(&self) -> (Span, Span) {
        debug_assert!(!self.is_unit(), "Unit span has no halves");

        let mid = self.midpoint();
        (
            Span {
                start: self.start,
                end: mid,
            },
            Span {
                start: mid,
                end: self.end,
            },
        )
    }

    /// Whether `other` lies inside this span (or equals it)
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two spans partially overlap with neither containing the
    /// other.
    ///
    /// `self` plays the reference role and `other` the hypothesis role; the
    /// relation is symmetric.
    pub fn crosses(&self, other: &Span) -> bool {
        let (g, h) = (self, other);
        (g.start < h.start && h.start < g.end && g.end < h.end)
            || (h.start < g.start && g.start < h.end && g.end > h.end)
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Span::new(start, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}
