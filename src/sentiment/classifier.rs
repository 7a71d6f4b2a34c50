// Three-way sentiment label.
//
// Thresholds are evaluated top-down and are a fixed contract:
//   polarity >  0.15  → Positive
//   polarity >  0.0   → Neutral
//   otherwise         → Negative (including exactly 0.0)

use anyhow::Result;
use serde::Serialize;

use super::traits::{SentimentModel, SentimentScore};

/// Polarity must exceed this to be labeled Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.15;
/// Polarity must exceed this to be labeled Neutral.
pub const NEUTRAL_THRESHOLD: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        match polarity {
            p if p > POSITIVE_THRESHOLD => SentimentLabel::Positive,
            p if p > NEUTRAL_THRESHOLD => SentimentLabel::Neutral,
            _ => SentimentLabel::Negative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scores plus the label derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

impl From<SentimentScore> for SentimentResult {
    fn from(score: SentimentScore) -> Self {
        Self {
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            label: SentimentLabel::from_polarity(score.polarity),
        }
    }
}

/// Score `text` with `model` and attach the label.
pub fn classify(model: &dyn SentimentModel, text: &str) -> Result<SentimentResult> {
    Ok(model.score(text)?.into())
}
