//! Binary shift/reduce transitions
//!
//! A well-formed sequence over n leaves has n SHIFTs and n - 1 REDUCEs and
//! never reduces with fewer than two items on the stack. Sequences are
//! stored one bit per action: 0 = SHIFT, 1 = REDUCE.

mod canonical;
mod parse;

pub use canonical::{balanced, left_branching, right_branching, Baseline};
pub use parse::{parse_actions, ActionFormat};

use bitvec::prelude::*;
use std::fmt;

use crate::{EvalError, EvalResult, MalformedReason};

/// Single transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Push the next unconsumed leaf
    Shift,

    /// Merge the two most recent stack items
    Reduce,
}

impl Action {
    #[inline]
    fn from_bit(bit: bool) -> Self {
        if bit {
            Action::Reduce
        } else {
            Action::Shift
        }
    }

    #[inline]
    fn to_bit(self) -> bool {
        matches!(self, Action::Reduce)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift => write!(f, "S"),
            Action::Reduce => write!(f, "R"),
        }
    }
}

/// Bit-packed action sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActionSequence {
    bits: BitVec,
}

impl ActionSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { bits: BitVec::new() }
    }

    /// Create with room for `len` actions
    pub fn with_capacity(len: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(len),
        }
    }

    /// Append an action
    pub fn push(&mut self, action: Action) {
        self.bits.push(action.to_bit());
    }

    /// Number of actions
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Action at `index`
    pub fn get(&self, index: usize) -> Option<Action> {
        self.bits.get(index).map(|bit| Action::from_bit(*bit))
    }

    /// Iterate actions in order
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.bits.iter().by_vals().map(Action::from_bit)
    }

    /// Number of SHIFT actions
    pub fn shifts(&self) -> usize {
        self.bits.count_zeros()
    }

    /// Number of REDUCE actions
    pub fn reduces(&self) -> usize {
        self.bits.count_ones()
    }

    /// Leaf count implied by the length: n = (len + 1) / 2.
    ///
    /// The empty sequence implies no leaves and is rejected.
    pub fn inferred_leaves(&self) -> EvalResult<usize> {
        infer_leaves(self.len())
    }

    /// Unpack into a vector of actions
    pub fn to_vec(&self) -> Vec<Action> {
        self.iter().collect()
    }
}

impl FromIterator<Action> for ActionSequence {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().map(Action::to_bit).collect(),
        }
    }
}

impl From<&[Action]> for ActionSequence {
    fn from(actions: &[Action]) -> Self {
        actions.iter().copied().collect()
    }
}

impl fmt::Display for ActionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

/// Leaf count for a sequence of `len` actions
pub(crate) fn infer_leaves(len: usize) -> EvalResult<usize> {
    if len == 0 {
        return Err(EvalError::MalformedActionSequence {
            prefix_len: 0,
            reason: MalformedReason::EmptyTree,
        });
    }
    if (len + 1) % 2 != 0 {
        return Err(EvalError::MalformedActionSequence {
            prefix_len: len,
            reason: MalformedReason::EvenLength { len },
        });
    }
    Ok((len + 1) / 2)
}
