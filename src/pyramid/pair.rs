//! Premise/hypothesis composition
//!
//! Both sentences of a pair go through the same merge operator. The two
//! roots are kept apart until the caller joins them, e.g. by concatenating
//! features for a downstream classifier.

use super::{compose, Merge};
use crate::EvalResult;

/// Roots of a composed sentence pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairComposition<T> {
    /// Root of the first sentence
    pub premise: T,
    /// Root of the second sentence
    pub hypothesis: T,
}

impl<T> PairComposition<T> {
    /// Combine the two roots
    pub fn join<U, F>(self, f: F) -> U
    where
        F: FnOnce(T, T) -> U,
    {
        f(self.premise, self.hypothesis)
    }

    /// Apply `f` to both roots
    pub fn map<U, F>(self, mut f: F) -> PairComposition<U>
    where
        F: FnMut(T) -> U,
    {
        PairComposition {
            premise: f(self.premise),
            hypothesis: f(self.hypothesis),
        }
    }
}

/// Compose both sentences with the same operator
pub fn compose_pair<T, M>(premise: &[T], hypothesis: &[T], merge: &M) -> EvalResult<PairComposition<T>>
where
    T: Clone,
    M: Merge<T> + ?Sized,
{
    Ok(PairComposition {
        premise: compose(premise, merge)?,
        hypothesis: compose(hypothesis, merge)?,
    })
}
