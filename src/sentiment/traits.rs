// Sentiment model trait: the swap-ready abstraction.
//
// The classifier only needs a (polarity, subjectivity) pair for a string.
// The default implementation is the bundled lexicon analyzer; anything that
// can produce the pair (a remote API, an ONNX classifier) can stand in.

use anyhow::Result;
use serde::Serialize;

/// Raw scores produced by a sentiment model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScore {
    /// -1.0 (unfavorable) to 1.0 (favorable)
    pub polarity: f64,
    /// 0.0 (factual) to 1.0 (opinionated)
    pub subjectivity: f64,
}

/// Trait for scoring text polarity and subjectivity.
pub trait SentimentModel {
    fn score(&self, text: &str) -> Result<SentimentScore>;
}

/// Model that always returns the same scores. Useful when the label rule is
/// what's under test, not the model.
#[derive(Debug, Clone, Copy)]
pub struct FixedScoreModel(pub SentimentScore);

impl SentimentModel for FixedScoreModel {
    fn score(&self, _text: &str) -> Result<SentimentScore> {
        Ok(self.0)
    }
}
