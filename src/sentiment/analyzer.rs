// Lexicon-based polarity/subjectivity analyzer.
//
// Walks the tokens of a text and turns every lexicon hit into an
// assessment. An intensifier directly before a hit scales it; a negation
// directly before the hit (or before its intensifier) multiplies its
// polarity by -0.5, so "not good" is mildly negative rather than the mirror
// image of "good". Punctuation and unknown words break the modifier chain.
//
// The text's scores are the means over all assessments. A text with no
// assessments (including the empty string) scores (0.0, 0.0).
//
// Negations and intensifiers are stop words, so they only take effect when
// the analyzer is given text as written. On normalized text every hit is
// scored on its own.

use anyhow::Result;
use tracing::trace;

use super::lexicon::{intensity, is_negation, lookup};
use super::traits::{SentimentModel, SentimentScore};
use crate::text::tokenizer::tokenize;

/// Polarity multiplier applied to a negated assessment.
const NEGATION_FACTOR: f64 = -0.5;

/// One scored lexicon hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub word: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// The default sentiment model: a bundled review lexicon with negation and
/// intensifier handling. Stateless; cheap to construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    /// List the individual assessments for `text`, in order.
    pub fn assessments(&self, text: &str) -> Vec<Assessment> {
        let lowered = text.to_lowercase();
        let mut out = Vec::new();

        let mut negated = false;
        let mut factor: Option<f64> = None;

        for token in tokenize(&lowered) {
            if is_negation(token) {
                negated = true;
                factor = None;
                continue;
            }
            if let Some(f) = intensity(token) {
                factor = Some(factor.unwrap_or(1.0) * f);
                continue;
            }
            if let Some((polarity, subjectivity)) = lookup(token) {
                let scale = factor.unwrap_or(1.0);
                let mut polarity = polarity * scale;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                out.push(Assessment {
                    word: token.to_string(),
                    polarity: polarity.clamp(-1.0, 1.0),
                    subjectivity: (subjectivity * scale).clamp(0.0, 1.0),
                });
            }
            negated = false;
            factor = None;
        }

        out
    }
}

impl SentimentModel for LexiconAnalyzer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return Ok(SentimentScore::default());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        trace!(assessments = assessments.len(), polarity, subjectivity, "Scored text");

        Ok(SentimentScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }
}
