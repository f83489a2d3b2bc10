//! Aggregated crossing-bracket statistics

use std::fmt;

use super::SentenceEvaluation;

/// Corpus totals, accumulated one sentence at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CorpusReport {
    /// Sentences scored
    pub sentences: usize,
    /// Sentences dropped as malformed
    pub skipped: usize,
    /// Spans in all reference trees
    pub reference_brackets: usize,
    /// Spans in all hypothesis trees
    pub hypothesis_brackets: usize,
    /// Spans present in both trees of a sentence
    pub matched_brackets: usize,
    /// Crossing pairs over all sentences
    pub crossing_brackets: usize,
    /// Sentences whose two trees are identical
    pub exact_trees: usize,
    /// Sentences with no crossing pair
    pub zero_crossing_sentences: usize,
    /// Sentences with at most two crossing pairs
    pub two_or_fewer_crossing_sentences: usize,
}

impl CorpusReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored sentence into the totals
    pub fn record(&mut self, sentence: &SentenceEvaluation) {
        let crossings = sentence.crossing_count();

        self.sentences += 1;
        self.reference_brackets += sentence.reference.len();
        self.hypothesis_brackets += sentence.hypothesis.len();
        self.matched_brackets += sentence.matched;
        self.crossing_brackets += crossings;
        if sentence.is_exact() {
            self.exact_trees += 1;
        }
        if crossings == 0 {
            self.zero_crossing_sentences += 1;
        }
        if crossings <= 2 {
            self.two_or_fewer_crossing_sentences += 1;
        }
    }

    /// Count a skipped sentence
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Matched / hypothesis brackets, in percent
    pub fn precision(&self) -> f64 {
        percent(self.matched_brackets, self.hypothesis_brackets)
    }

    /// Matched / reference brackets, in percent
    pub fn recall(&self) -> f64 {
        percent(self.matched_brackets, self.reference_brackets)
    }

    /// Harmonic mean of precision and recall, in percent
    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    /// Crossing pairs per scored sentence
    pub fn average_crossings(&self) -> f64 {
        if self.sentences == 0 {
            0.0
        } else {
            self.crossing_brackets as f64 / self.sentences as f64
        }
    }

    /// Share of sentences without crossings, in percent
    pub fn zero_crossing_ratio(&self) -> f64 {
        percent(self.zero_crossing_sentences, self.sentences)
    }

    /// Share of sentences with at most two crossings, in percent
    pub fn two_or_fewer_crossing_ratio(&self) -> f64 {
        percent(self.two_or_fewer_crossing_sentences, self.sentences)
    }
}

fn percent(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        100.0 * numerator as f64 / denominator as f64
    }
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Crossing Bracket Summary ===")?;
        writeln!(f, "Sentences evaluated      : {}", self.sentences)?;
        writeln!(f, "Sentences skipped        : {}", self.skipped)?;
        writeln!(f, "Reference brackets       : {}", self.reference_brackets)?;
        writeln!(f, "Hypothesis brackets      : {}", self.hypothesis_brackets)?;
        writeln!(f, "Matched brackets         : {}", self.matched_brackets)?;
        writeln!(f, "Bracket precision        : {:.2}", self.precision())?;
        writeln!(f, "Bracket recall           : {:.2}", self.recall())?;
        writeln!(f, "Bracket F1               : {:.2}", self.f1())?;
        writeln!(f, "Exact trees              : {}", self.exact_trees)?;
        writeln!(f, "Crossing brackets        : {}", self.crossing_brackets)?;
        writeln!(f, "Average crossings        : {:.2}", self.average_crossings())?;
        writeln!(
            f,
            "Zero-crossing sentences  : {} ({:.2}%)",
            self.zero_crossing_sentences,
            self.zero_crossing_ratio()
        )?;
        writeln!(
            f,
            "<=2 crossing sentences   : {} ({:.2}%)",
            self.two_or_fewer_crossing_sentences,
            self.two_or_fewer_crossing_ratio()
        )
    }
}
