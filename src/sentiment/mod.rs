// Sentiment scoring: polarity/subjectivity models and the three-way label.

pub mod analyzer;
pub mod classifier;
pub mod lexicon;
pub mod traits;
