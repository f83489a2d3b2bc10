//! Bracket reconstruction from shift/reduce actions
//!
//! Walks the action sequence with an explicit stack of spans. Each REDUCE
//! pops R (most recent) and L, pushes (L.start, R.end) and records whichever
//! of L and R is not a unit span. The root left on the stack is recorded
//! unconditionally, so a single leaf reconstructs to {(0, 1)}.

use tracing::debug;

use crate::span::{Span, SpanSet};
use crate::transition::{Action, ActionSequence};
use crate::{EvalError, EvalResult, MalformedReason};

/// Stack machine over the unit leaf spans [0,1), [1,2), ..., [n-1,n)
#[derive(Debug)]
pub struct Bracketer {
    /// Working stack (array-backed, pop from end)
    stack: Vec<Span>,

    /// Next unconsumed leaf
    cursor: usize,

    /// Total leaves
    leaves: usize,

    /// Actions consumed so far
    consumed: usize,

    /// Accumulated non-unit spans
    spans: SpanSet,
}

impl Bracketer {
    /// Start a walk over `leaves` leaves
    pub fn new(leaves: usize) -> Self {
        Self {
            stack: Vec::new(),
            cursor: 0,
            leaves,
            consumed: 0,
            spans: SpanSet::new(),
        }
    }

    /// Apply one action
    pub fn step(&mut self, action: Action) -> EvalResult<()> {
        match action {
            Action::Shift => {
                if self.cursor >= self.leaves {
                    return Err(self.malformed(MalformedReason::LeavesExhausted {
                        leaves: self.leaves,
                    }));
                }
                self.stack.push(Span::unit(self.cursor));
                self.cursor += 1;
            }
            Action::Reduce => {
                let depth = self.stack.len();
                if depth < 2 {
                    return Err(self.malformed(MalformedReason::StackUnderflow { depth }));
                }
                let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
                    return Err(self.malformed(MalformedReason::StackUnderflow { depth }));
                };
                self.stack.push(Span::new(left.start, right.end));
                if !left.is_unit() {
                    self.spans.insert(left);
                }
                if !right.is_unit() {
                    self.spans.insert(right);
                }
            }
        }
        self.consumed += 1;
        Ok(())
    }

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Finish the walk: exactly one item must remain, and it is recorded
    pub fn finish(mut self) -> EvalResult<SpanSet> {
        if self.stack.len() != 1 {
            return Err(self.malformed(MalformedReason::UnreducedStack {
                remaining: self.stack.len(),
            }));
        }
        if self.cursor != self.leaves {
            return Err(self.malformed(MalformedReason::LeavesRemaining {
                consumed: self.cursor,
                leaves: self.leaves,
            }));
        }
        if let Some(root) = self.stack.pop() {
            self.spans.insert(root);
        }
        Ok(self.spans)
    }

    fn malformed(&self, reason: MalformedReason) -> EvalError {
        EvalError::MalformedActionSequence {
            prefix_len: self.consumed,
            reason,
        }
    }
}

/// Reconstruct the span set of the tree encoded by `actions` over `leaves`
/// leaves.
///
/// For a single leaf, both the empty sequence and `[Shift]` are accepted.
pub fn reconstruct(actions: &[Action], leaves: usize) -> EvalResult<SpanSet> {
    let shifts = actions.iter().filter(|a| **a == Action::Shift).count();
    let reduces = actions.len() - shifts;
    walk(actions.iter().copied(), leaves, shifts, reduces)
}

/// [`reconstruct`] over a bit-packed sequence
pub fn reconstruct_sequence(actions: &ActionSequence, leaves: usize) -> EvalResult<SpanSet> {
    walk(actions.iter(), leaves, actions.shifts(), actions.reduces())
}

/// Reconstruct with the leaf count inferred as (len + 1) / 2
pub fn reconstruct_inferred(actions: &ActionSequence) -> EvalResult<SpanSet> {
    let leaves = actions.inferred_leaves()?;
    reconstruct_sequence(actions, leaves)
}

fn walk<I>(actions: I, leaves: usize, shifts: usize, reduces: usize) -> EvalResult<SpanSet>
where
    I: Iterator<Item = Action>,
{
    if leaves == 0 {
        return Err(EvalError::MalformedActionSequence {
            prefix_len: 0,
            reason: MalformedReason::EmptyTree,
        });
    }

    // Single leaf with no actions: the root is the unit span itself
    if leaves == 1 && shifts == 0 && reduces == 0 {
        return Ok(std::iter::once(Span::unit(0)).collect());
    }

    if shifts != leaves || reduces + 1 != leaves {
        debug!(leaves, shifts, reduces, "action counts do not describe a binary tree");
        return Err(EvalError::MalformedActionSequence {
            prefix_len: shifts + reduces,
            reason: MalformedReason::CountMismatch {
                leaves,
                shifts,
                reduces,
            },
        });
    }

    let mut bracketer = Bracketer::new(leaves);
    for action in actions {
        bracketer.step(action).map_err(|err| {
            debug!(%err, "reconstruction aborted");
            err
        })?;
    }
    bracketer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Action::*;

    fn spans(pairs: &[(usize, usize)]) -> SpanSet {
        pairs.iter().copied().map(Span::from).collect()
    }

    #[test]
    fn test_left_branching_four() {
        let actions = [Shift, Shift, Reduce, Shift, Reduce, Shift, Reduce];
        let result = reconstruct(&actions, 4).unwrap();
        assert_eq!(result, spans(&[(0, 2), (0, 3), (0, 4)]));
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(reconstruct(&[], 1).unwrap(), spans(&[(0, 1)]));
        assert_eq!(reconstruct(&[Shift], 1).unwrap(), spans(&[(0, 1)]));
    }

    #[test]
    fn test_bracketer_underflow_reports_prefix() {
        let mut bracketer = Bracketer::new(3);
        bracketer.step(Shift).unwrap();
        assert_eq!(bracketer.depth(), 1);

        let err = bracketer.step(Reduce).unwrap_err();
        assert_eq!(
            err,
            EvalError::MalformedActionSequence {
                prefix_len: 1,
                reason: MalformedReason::StackUnderflow { depth: 1 },
            }
        );
    }

    #[test]
    fn test_bracketer_rejects_extra_shift() {
        let mut bracketer = Bracketer::new(1);
        bracketer.step(Shift).unwrap();
        assert!(matches!(
            bracketer.step(Shift),
            Err(EvalError::MalformedActionSequence {
                reason: MalformedReason::LeavesExhausted { leaves: 1 },
                ..
            })
        ));
    }

    #[test]
    fn test_bracketer_finish_requires_single_root() {
        let mut bracketer = Bracketer::new(2);
        bracketer.step(Shift).unwrap();
        bracketer.step(Shift).unwrap();
        assert!(matches!(
            bracketer.finish(),
            Err(EvalError::MalformedActionSequence {
                prefix_len: 2,
                reason: MalformedReason::UnreducedStack { remaining: 2 },
            })
        ));
    }

    #[test]
    fn test_bracketer_finish_reports_unshifted_leaves() {
        let mut bracketer = Bracketer::new(3);
        bracketer.step(Shift).unwrap();

        let err = bracketer.finish().unwrap_err();
        assert_eq!(
            err,
            EvalError::MalformedActionSequence {
                prefix_len: 1,
                reason: MalformedReason::LeavesRemaining {
                    consumed: 1,
                    leaves: 3,
                },
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed action sequence after 1 action(s): only 1 of 3 leaves were shifted"
        );
    }

    #[test]
    fn test_zero_leaves_rejected() {
        assert!(matches!(
            reconstruct(&[], 0),
            Err(EvalError::MalformedActionSequence {
                reason: MalformedReason::EmptyTree,
                ..
            })
        ));
    }
}
