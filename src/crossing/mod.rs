//! Crossing-bracket evaluation
//!
//! A hypothesis span h crosses a reference span g when they partially
//! overlap and neither contains the other. At most one crossing pair is
//! recorded per hypothesis span: the scan over reference spans stops at the
//! first match, so the count is bounded by the hypothesis set size.

use std::fmt;

use crate::bracketing::reconstruct_inferred;
use crate::span::{Span, SpanSet};
use crate::transition::ActionSequence;
use crate::{EvalError, EvalResult};

/// One reference span crossed by one hypothesis span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingPair {
    /// Reference (gold) span
    pub reference: Span,
    /// Hypothesis (predicted) span
    pub hypothesis: Span,
}

impl fmt::Display for CrossingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.reference, self.hypothesis)
    }
}

/// Crossing pairs in hypothesis iteration order (ascending spans)
pub fn crossings(reference: &SpanSet, hypothesis: &SpanSet) -> Vec<CrossingPair> {
    hypothesis
        .iter()
        .filter_map(|h| {
            reference
                .iter()
                .find(|g| g.crosses(h))
                .map(|g| CrossingPair {
                    reference: *g,
                    hypothesis: *h,
                })
        })
        .collect()
}

/// Reconstruct both trees and report their crossings.
///
/// Both sequences must describe the same number of leaves.
pub fn crossing_actions(
    reference: &ActionSequence,
    hypothesis: &ActionSequence,
) -> EvalResult<Vec<CrossingPair>> {
    let reference_leaves = reference.inferred_leaves()?;
    let hypothesis_leaves = hypothesis.inferred_leaves()?;
    if reference_leaves != hypothesis_leaves {
        return Err(EvalError::LeafCountMismatch {
            reference: reference_leaves,
            hypothesis: hypothesis_leaves,
        });
    }

    let gold = reconstruct_inferred(reference)?;
    let pred = reconstruct_inferred(hypothesis)?;
    Ok(crossings(&gold, &pred))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{left_branching, right_branching};

    fn spans(pairs: &[(usize, usize)]) -> SpanSet {
        pairs.iter().copied().map(Span::from).collect()
    }

    #[test]
    fn test_first_match_only() {
        let reference = spans(&[(0, 2), (0, 4)]);
        let hypothesis = spans(&[(1, 3)]);

        let pairs = crossings(&reference, &hypothesis);
        assert_eq!(
            pairs,
            vec![CrossingPair {
                reference: Span::new(0, 2),
                hypothesis: Span::new(1, 3),
            }]
        );
    }

    #[test]
    fn test_one_pair_per_hypothesis_span() {
        // (1, 3) crosses both (0, 2) and (2, 4); only the first is kept
        let reference = spans(&[(0, 2), (2, 4), (0, 4)]);
        let hypothesis = spans(&[(1, 3), (0, 4)]);
        let pairs = crossings(&reference, &hypothesis);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].reference, Span::new(0, 2));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(crossings(&SpanSet::new(), &spans(&[(0, 2)])).is_empty());
        assert!(crossings(&spans(&[(0, 2)]), &SpanSet::new()).is_empty());
    }

    #[test]
    fn test_left_against_right_branching() {
        // left: {(0,2),(0,3),(0,4)}  right: {(0,4),(1,4),(2,4)}
        let pairs = crossing_actions(&left_branching(4), &right_branching(4)).unwrap();
        let hyp: Vec<_> = pairs.iter().map(|p| p.hypothesis).collect();
        assert_eq!(hyp, vec![Span::new(1, 4), Span::new(2, 4)]);
        assert_eq!(pairs[0].reference, Span::new(0, 2));
        assert_eq!(pairs[1].reference, Span::new(0, 3));
    }

    #[test]
    fn test_leaf_count_mismatch() {
        let err = crossing_actions(&left_branching(3), &left_branching(4)).unwrap_err();
        assert_eq!(
            err,
            EvalError::LeafCountMismatch {
                reference: 3,
                hypothesis: 4,
            }
        );
    }
}
