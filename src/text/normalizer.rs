// Review text normalizer.
//
// Produces the cleaned form of a review that the sentiment and similarity
// stages consume: stop-words removed, tokens separated by single spaces,
// lowercase, no surrounding whitespace.
//
// The text is lowercased before tokenizing rather than after joining. The
// two orders give the same result for ordinary text, but lowercasing first
// keeps the output stable under re-normalization even for characters whose
// lowercase form tokenizes differently (e.g. 'İ' → "i\u{307}").

use std::collections::HashSet;

use serde::Serialize;
use stop_words::{get, LANGUAGE};

use super::tokenizer::tokenize;
use crate::reviews::models::{ReviewRecord, ReviewTable};

/// A review after normalization, still tied to its source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedReview {
    /// Original row index of the source record
    pub index: usize,
    /// Normalized text (may be empty if the review was all stop-words)
    pub text: String,
}

/// Stop-word aware normalizer. Holds the stop-word table; construct once and
/// pass it to whatever needs to normalize text.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: HashSet<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl TextNormalizer {
    /// Normalizer using the NLTK English stop-word list from the `stop-words`
    /// crate. The list holds function words only (pronouns, articles,
    /// auxiliaries, negations and degree adverbs), so opinion words such as
    /// "great" or "problem" survive for the sentiment stage.
    pub fn english() -> Self {
        Self::with_stop_words(get(LANGUAGE::English))
    }

    /// Normalizer with a caller-supplied stop-word list. Entries are
    /// lowercased; matching is case-insensitive.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    /// Normalize one piece of free text. Never fails; text with no
    /// surviving tokens becomes an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let kept: Vec<&str> = tokenize(&lowered)
            .filter(|token| !self.stop_words.contains(*token))
            .collect();
        kept.join(" ").trim().to_string()
    }

    pub fn normalize_record(&self, record: &ReviewRecord) -> NormalizedReview {
        NormalizedReview {
            index: record.index,
            text: self.normalize(&record.text),
        }
    }

    /// Normalize every record of a table, preserving order and indices.
    pub fn normalize_table(&self, table: &ReviewTable) -> Vec<NormalizedReview> {
        table
            .records()
            .iter()
            .map(|r| self.normalize_record(r))
            .collect()
    }
}
