//! # Pyramid Composition and Crossing-Bracket Evaluation
//!
//! Two independent pipelines over binary constituency structure:
//!
//! 1. **Bracket evaluation**: a SHIFT/REDUCE action sequence is turned into
//!    the set of non-trivial spans of the binary tree it encodes, and two
//!    such span sets are compared by counting crossing brackets.
//! 2. **Pyramid composition**: a sequence of opaque vectors is reduced to a
//!    single vector by merging every adjacent pair, layer after layer, with
//!    a caller-supplied binary operator.
//!
//! Both are pure functions over immutable inputs.
//!
//! ## Usage Example
//!
//! ```
//! use pyramid_evalb::{crossings, reconstruct, Action::*};
//!
//! let gold = reconstruct(&[Shift, Shift, Reduce, Shift, Reduce, Shift, Reduce], 4)?;
//! let pred = reconstruct(&[Shift, Shift, Shift, Shift, Reduce, Reduce, Reduce], 4)?;
//! assert_eq!(crossings(&gold, &pred).len(), 2);
//!
//! let root = pyramid_evalb::compose(&[1, 2, 3], &|l: &i32, r: &i32| l + r)?;
//! assert_eq!(root, 8);
//! # Ok::<(), pyramid_evalb::EvalError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod span;       // Span value type and ordered span sets
pub mod transition; // SHIFT/REDUCE actions and their text forms
pub mod bracketing; // Action sequence -> span set
pub mod crossing;   // Crossing-bracket comparison
pub mod evaluation; // Corpus-level scoring
pub mod pyramid;    // Exhaustive adjacent-pair composition

// Re-exports for convenience
pub use bracketing::{reconstruct, reconstruct_inferred, reconstruct_sequence, Bracketer};
pub use crossing::{crossing_actions, crossings, CrossingPair};
pub use evaluation::{CorpusEvaluator, CorpusReport, EvaluatorConfig, SentenceEvaluation};
pub use pyramid::{compose, compose_pair, compose_table, CountingMerge, Merge, PyramidTable};
pub use span::{Span, SpanSet};
pub use transition::{Action, ActionFormat, ActionSequence, Baseline};

use thiserror::Error;

/// Why an action sequence does not encode a binary tree
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Zero leaves requested or implied
    #[error("a tree needs at least one leaf")]
    EmptyTree,

    /// Length is even, so (len + 1) / 2 is not a leaf count
    #[error("length {len} is even, expected 2n - 1 actions")]
    EvenLength {
        /// Sequence length
        len: usize,
    },

    /// Not exactly n SHIFTs and n - 1 REDUCEs
    #[error(
        "{leaves} leaves need {leaves} SHIFTs and {} REDUCEs, found {shifts} and {reduces}",
        .leaves.saturating_sub(1)
    )]
    CountMismatch {
        /// Expected leaves
        leaves: usize,
        /// SHIFTs found
        shifts: usize,
        /// REDUCEs found
        reduces: usize,
    },

    /// REDUCE with fewer than two items on the stack
    #[error("REDUCE with {depth} item(s) on the stack")]
    StackUnderflow {
        /// Stack depth at the failing REDUCE
        depth: usize,
    },

    /// SHIFT after every leaf was consumed
    #[error("SHIFT after all {leaves} leaves were consumed")]
    LeavesExhausted {
        /// Total leaves
        leaves: usize,
    },

    /// Sequence ended without a single root on the stack
    #[error("{remaining} item(s) left on the stack, expected 1")]
    UnreducedStack {
        /// Items left on the stack
        remaining: usize,
    },

    /// Sequence ended before every leaf was shifted
    #[error("only {consumed} of {leaves} leaves were shifted")]
    LeavesRemaining {
        /// Leaves shifted
        consumed: usize,
        /// Total leaves
        leaves: usize,
    },
}

/// Errors raised by reconstruction, composition and evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Action counts or stack discipline violated
    #[error("malformed action sequence after {prefix_len} action(s): {reason}")]
    MalformedActionSequence {
        /// Actions consumed when the failure was detected
        prefix_len: usize,
        /// What went wrong
        reason: MalformedReason,
    },

    /// Pyramid composition over zero vectors
    #[error("cannot compose an empty sequence")]
    EmptySequence,

    /// Unrecognised token in a text action sequence
    #[error("invalid action token '{token}' at position {position}")]
    InvalidActionToken {
        /// Offending token
        token: String,
        /// 0-based token position
        position: usize,
    },

    /// Reference and hypothesis trees cover different leaf counts
    #[error("reference has {reference} leaves but hypothesis has {hypothesis}")]
    LeafCountMismatch {
        /// Reference leaves
        reference: usize,
        /// Hypothesis leaves
        hypothesis: usize,
    },

    /// Corpora of unequal length
    #[error("reference has {reference} sentences but hypothesis has {hypothesis}")]
    CorpusLengthMismatch {
        /// Reference sentences
        reference: usize,
        /// Hypothesis sentences
        hypothesis: usize,
    },

    /// Failure while scoring one sentence of a corpus
    #[error("sentence {index}: {source}")]
    Sentence {
        /// 0-based sentence index
        index: usize,
        /// Underlying failure
        #[source]
        source: Box<EvalError>,
    },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result alias for this crate
pub type EvalResult<T> = Result<T, EvalError>;
