//! Corpus evaluation settings

use crate::transition::ActionFormat;

/// Configuration for corpus-level evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Token vocabulary for text input
    pub action_format: ActionFormat,
    /// Count malformed sentences as skipped instead of failing the corpus
    pub skip_malformed: bool,
    /// Retain per-sentence results after scoring
    pub keep_sentences: bool,
    /// Log every sentence at info level
    pub verbose: bool,
}

impl EvaluatorConfig {
    /// Defaults: auto-detected format, strict, sentences kept
    pub fn new() -> Self {
        Self {
            action_format: ActionFormat::Auto,
            skip_malformed: false,
            keep_sentences: true,
            verbose: false,
        }
    }

    /// Set the accepted action format.
    pub fn with_action_format(mut self, format: ActionFormat) -> Self {
        self.action_format = format;
        self
    }

    /// Skip malformed sentences.
    pub fn with_skip_malformed(mut self, enabled: bool) -> Self {
        self.skip_malformed = enabled;
        self
    }

    /// Keep per-sentence results.
    pub fn with_keep_sentences(mut self, enabled: bool) -> Self {
        self.keep_sentences = enabled;
        self
    }

    /// Enable verbose mode.
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
