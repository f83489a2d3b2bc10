//! Full pyramid table
//!
//! Level 0 is the input; level k has n - k cells. Cell (k, p) is the
//! composition of input positions p..=p+k.

use crate::span::Span;

/// Every layer of one pyramid composition
#[derive(Debug, Clone, PartialEq)]
pub struct PyramidTable<T> {
    layers: Vec<Vec<T>>,
}

impl<T> PyramidTable<T> {
    pub(crate) fn from_layers(layers: Vec<Vec<T>>) -> Self {
        debug_assert!(!layers.is_empty());
        debug_assert!(layers
            .windows(2)
            .all(|pair| pair[1].len() + 1 == pair[0].len()));
        Self { layers }
    }

    /// Input length n
    pub fn width(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    /// Number of layers (n)
    pub fn height(&self) -> usize {
        self.layers.len()
    }

    /// Layer at `level` (0 = input)
    pub fn layer(&self, level: usize) -> Option<&[T]> {
        self.layers.get(level).map(Vec::as_slice)
    }

    /// Iterate layers from the input upwards
    pub fn layers(&self) -> impl Iterator<Item = &[T]> {
        self.layers.iter().map(Vec::as_slice)
    }

    /// Composition covering exactly `span` of the input
    pub fn cell(&self, span: Span) -> Option<&T> {
        self.layers.get(span.len().checked_sub(1)?)?.get(span.start)
    }

    /// Top of the pyramid
    pub fn root(&self) -> Option<&T> {
        self.layers.last().and_then(|layer| layer.first())
    }

    /// Merges performed to build the table
    pub fn merges(&self) -> usize {
        self.layers.iter().skip(1).map(Vec::len).sum()
    }

    /// Take the root, dropping intermediate layers
    pub fn into_root(mut self) -> Option<T> {
        self.layers.pop().and_then(|mut layer| layer.pop())
    }
}
