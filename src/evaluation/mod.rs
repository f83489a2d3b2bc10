//! Corpus-level crossing-bracket evaluation
//!
//! Pairs of reference/hypothesis action sequences are reconstructed into
//! span sets, compared for crossings and matched brackets, and folded into
//! a [`CorpusReport`].

mod config;
mod report;

pub use config::EvaluatorConfig;
pub use report::CorpusReport;

use tracing::{debug, info, warn};

use crate::bracketing::reconstruct_sequence;
use crate::crossing::{crossings, CrossingPair};
use crate::span::SpanSet;
use crate::transition::{parse_actions, ActionSequence};
use crate::{EvalError, EvalResult};

/// Scores for one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceEvaluation {
    /// 0-based position in the corpus
    pub index: usize,
    /// Leaf count shared by both trees
    pub leaves: usize,
    /// Reference span set
    pub reference: SpanSet,
    /// Hypothesis span set
    pub hypothesis: SpanSet,
    /// Spans present in both sets
    pub matched: usize,
    /// Crossing pairs in hypothesis order
    pub crossings: Vec<CrossingPair>,
}

impl SentenceEvaluation {
    /// Number of crossing pairs
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    /// Whether both trees are identical
    pub fn is_exact(&self) -> bool {
        self.reference == self.hypothesis
    }
}

/// Score one sentence.
///
/// The leaf count is inferred from each sequence and must agree.
pub fn evaluate_sentence(
    index: usize,
    reference: &ActionSequence,
    hypothesis: &ActionSequence,
) -> EvalResult<SentenceEvaluation> {
    let leaves = reference.inferred_leaves()?;
    let hypothesis_leaves = hypothesis.inferred_leaves()?;
    if leaves != hypothesis_leaves {
        return Err(EvalError::LeafCountMismatch {
            reference: leaves,
            hypothesis: hypothesis_leaves,
        });
    }

    let reference = reconstruct_sequence(reference, leaves)?;
    let hypothesis = reconstruct_sequence(hypothesis, leaves)?;
    let crossings = crossings(&reference, &hypothesis);
    let matched = reference.matched(&hypothesis);

    Ok(SentenceEvaluation {
        index,
        leaves,
        reference,
        hypothesis,
        matched,
        crossings,
    })
}

/// Streaming evaluator over aligned sentence pairs
#[derive(Debug)]
pub struct CorpusEvaluator {
    config: EvaluatorConfig,
    report: CorpusReport,
    sentences: Vec<SentenceEvaluation>,
}

impl CorpusEvaluator {
    /// Create a new evaluator with the provided configuration.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            report: CorpusReport::new(),
            sentences: Vec::new(),
        }
    }

    /// Access configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Totals so far
    pub fn report(&self) -> &CorpusReport {
        &self.report
    }

    /// Retained per-sentence results (empty unless `keep_sentences`)
    pub fn sentences(&self) -> &[SentenceEvaluation] {
        &self.sentences
    }

    /// Consume the evaluator, keeping the totals
    pub fn finish(self) -> CorpusReport {
        self.report
    }

    fn next_index(&self) -> usize {
        self.report.sentences + self.report.skipped
    }

    /// Score one sentence pair.
    ///
    /// Returns `Ok(false)` when the sentence was malformed and skipped.
    pub fn push(
        &mut self,
        reference: &ActionSequence,
        hypothesis: &ActionSequence,
    ) -> EvalResult<bool> {
        let index = self.next_index();
        let outcome = evaluate_sentence(index, reference, hypothesis);
        self.absorb(index, outcome)
    }

    /// Parse and score one pair of text lines
    pub fn push_lines(&mut self, reference: &str, hypothesis: &str) -> EvalResult<bool> {
        let index = self.next_index();
        let format = self.config.action_format;
        let outcome = parse_actions(reference, format).and_then(|gold| {
            let pred = parse_actions(hypothesis, format)?;
            evaluate_sentence(index, &gold, &pred)
        });
        self.absorb(index, outcome)
    }

    /// Score a whole corpus of aligned lines
    pub fn evaluate_corpus<'a, R, H>(&mut self, reference: R, hypothesis: H) -> EvalResult<()>
    where
        R: IntoIterator<Item = &'a str>,
        H: IntoIterator<Item = &'a str>,
    {
        let reference: Vec<&str> = reference.into_iter().collect();
        let hypothesis: Vec<&str> = hypothesis.into_iter().collect();
        if reference.len() != hypothesis.len() {
            return Err(EvalError::CorpusLengthMismatch {
                reference: reference.len(),
                hypothesis: hypothesis.len(),
            });
        }

        for (gold, pred) in reference.iter().zip(&hypothesis) {
            self.push_lines(gold, pred)?;
        }
        Ok(())
    }

    fn absorb(
        &mut self,
        index: usize,
        outcome: EvalResult<SentenceEvaluation>,
    ) -> EvalResult<bool> {
        match outcome {
            Ok(sentence) => {
                if self.config.verbose {
                    info!(
                        index,
                        leaves = sentence.leaves,
                        matched = sentence.matched,
                        crossings = sentence.crossing_count(),
                        "sentence scored"
                    );
                } else {
                    debug!(
                        index,
                        leaves = sentence.leaves,
                        crossings = sentence.crossing_count(),
                        "sentence scored"
                    );
                }
                self.report.record(&sentence);
                if self.config.keep_sentences {
                    self.sentences.push(sentence);
                }
                Ok(true)
            }
            Err(err) if self.config.skip_malformed => {
                warn!(index, %err, "skipping malformed sentence");
                self.report.record_skipped();
                Ok(false)
            }
            Err(err) => Err(EvalError::Sentence {
                index,
                source: Box::new(err),
            }),
        }
    }
}
