//! Trivial-tree baselines
//!
//! Left-branching, right-branching and balanced bracketings are the usual
//! reference points when scoring a parser by crossing brackets.

use std::str::FromStr;

use super::{Action, ActionSequence};
use crate::span::Span;
use crate::EvalError;

/// Baseline tree shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// ((((a b) c) d) ...)
    LeftBranching,
    /// (a (b (c (d ...))))
    RightBranching,
    /// Midpoint recursion, left half takes the extra leaf
    Balanced,
}

impl Baseline {
    /// Action sequence for this shape over `leaves` leaves
    pub fn actions(self, leaves: usize) -> ActionSequence {
        match self {
            Baseline::LeftBranching => left_branching(leaves),
            Baseline::RightBranching => right_branching(leaves),
            Baseline::Balanced => balanced(leaves),
        }
    }
}

impl FromStr for Baseline {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "left-branching" => Ok(Baseline::LeftBranching),
            "right" | "right-branching" => Ok(Baseline::RightBranching),
            "balanced" => Ok(Baseline::Balanced),
            other => Err(EvalError::InvalidConfiguration(format!(
                "unknown baseline '{}'",
                other
            ))),
        }
    }
}

/// S S R S R ... S R
pub fn left_branching(leaves: usize) -> ActionSequence {
    let mut seq = ActionSequence::with_capacity(2 * leaves);
    if leaves == 0 {
        return seq;
    }
    seq.push(Action::Shift);
    for _ in 1..leaves {
        seq.push(Action::Shift);
        seq.push(Action::Reduce);
    }
    seq
}

/// All SHIFTs, then all REDUCEs
pub fn right_branching(leaves: usize) -> ActionSequence {
    let mut seq = ActionSequence::with_capacity(2 * leaves);
    for _ in 0..leaves {
        seq.push(Action::Shift);
    }
    for _ in 1..leaves {
        seq.push(Action::Reduce);
    }
    seq
}

/// Postorder walk of the midpoint-split tree
pub fn balanced(leaves: usize) -> ActionSequence {
    let mut seq = ActionSequence::with_capacity(2 * leaves);
    if leaves > 0 {
        emit_balanced(Span::new(0, leaves), &mut seq);
    }
    seq
}

// Recursion depth is ⌈log2 n⌉
fn emit_balanced(span: Span, seq: &mut ActionSequence) {
    if span.is_unit() {
        seq.push(Action::Shift);
        return;
    }
    let (left, right) = span.halves();
    emit_balanced(left, seq);
    emit_balanced(right, seq);
    seq.push(Action::Reduce);
}
