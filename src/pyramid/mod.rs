//! Pyramid composition
//!
//! Reduces n vectors to one by merging every adjacent pair, layer after
//! layer: n -> n-1 -> ... -> 1. Layer k is computed from layer k+1 only, so
//! a single previous layer is retained unless the full table is requested.
//! Total merges: n(n-1)/2.
//!
//! The vector type and the merge operator are opaque: any `T` and any
//! `Fn(&T, &T) -> T` will do. The operator need not be associative or
//! commutative.

mod pair;
mod table;

pub use pair::{compose_pair, PairComposition};
pub use table::PyramidTable;

use std::cell::Cell;

use tracing::trace;

use crate::{EvalError, EvalResult};

/// Binary composition capability: combine two `T` into one
pub trait Merge<T> {
    /// Merge `left` (earlier position) with `right`
    fn merge(&self, left: &T, right: &T) -> T;
}

impl<T, F> Merge<T> for F
where
    F: Fn(&T, &T) -> T,
{
    fn merge(&self, left: &T, right: &T) -> T {
        self(left, right)
    }
}

/// Merge wrapper counting invocations
#[derive(Debug)]
pub struct CountingMerge<M> {
    inner: M,
    calls: Cell<usize>,
}

impl<M> CountingMerge<M> {
    /// Wrap `inner`
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Merges performed so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Unwrap the operator
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<T, M: Merge<T>> Merge<T> for CountingMerge<M> {
    fn merge(&self, left: &T, right: &T) -> T {
        self.calls.set(self.calls.get() + 1);
        self.inner.merge(left, right)
    }
}

/// Merges required for a sequence of length `n`
pub fn merge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Compose `seq` down to a single element.
///
/// A one-element sequence is returned unchanged with no merges.
pub fn compose<T, M>(seq: &[T], merge: &M) -> EvalResult<T>
where
    T: Clone,
    M: Merge<T> + ?Sized,
{
    let (first, rest) = seq.split_first().ok_or(EvalError::EmptySequence)?;
    if rest.is_empty() {
        return Ok(first.clone());
    }

    let mut layer = next_layer(seq, merge);
    while layer.len() > 1 {
        layer = next_layer(&layer, merge);
    }
    layer.pop().ok_or(EvalError::EmptySequence)
}

/// Compose `seq` and keep every layer for inspection
pub fn compose_table<T, M>(seq: &[T], merge: &M) -> EvalResult<PyramidTable<T>>
where
    T: Clone,
    M: Merge<T> + ?Sized,
{
    if seq.is_empty() {
        return Err(EvalError::EmptySequence);
    }

    let mut layers = Vec::with_capacity(seq.len());
    layers.push(seq.to_vec());
    while let Some(previous) = layers.last().filter(|layer| layer.len() > 1) {
        let layer = next_layer(previous, merge);
        layers.push(layer);
    }
    Ok(PyramidTable::from_layers(layers))
}

// Positions within a layer are independent; only the previous layer is read.
fn next_layer<T, M>(previous: &[T], merge: &M) -> Vec<T>
where
    M: Merge<T> + ?Sized,
{
    let layer: Vec<T> = previous
        .windows(2)
        .map(|pair| merge.merge(&pair[0], &pair[1]))
        .collect();
    trace!(width = layer.len(), "pyramid layer composed");
    layer
}
