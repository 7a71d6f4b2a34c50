// Colored terminal output for analysis reports.
//
// Per-review lines read "Customer review N - Sentiment(polarity=..,
// subjectivity=..), Label"; the similarity is a single line with the score
// rounded to two places. Keep these stable, people grep them.

use colored::Colorize;

use super::{round_to, truncate_chars};
use crate::pipeline::analysis::{AnalysisReport, PairSimilarity, ReviewSentiment};
use crate::sentiment::classifier::{SentimentLabel, SentimentResult};
use crate::text::normalizer::NormalizedReview;

/// Longest normalized text shown on one preview line.
const PREVIEW_CHARS: usize = 100;

/// Display a full analysis report.
pub fn display_report(report: &AnalysisReport) {
    println!(
        "{}",
        format!(
            "Loaded {} reviews ({} rows read, {} without text)",
            report.rows_kept,
            report.rows_read,
            report.rows_read - report.rows_kept
        )
        .dimmed()
    );

    display_normalized_preview(&report.normalized_preview);
    display_sentiments(&report.sentiments);

    if let Some(pair) = &report.similarity {
        display_similarity(pair, &report.similarity_model);
    }
}

pub fn display_normalized_preview(reviews: &[NormalizedReview]) {
    if reviews.is_empty() {
        println!("No reviews with text found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Normalized reviews (first {}) ===", reviews.len()).bold()
    );
    for review in reviews {
        let text = if review.text.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            truncate_chars(&review.text, PREVIEW_CHARS)
        };
        println!("  {:>6}  {}", review.index.to_string().dimmed(), text);
    }
}

pub fn display_sentiments(sentiments: &[ReviewSentiment]) {
    if sentiments.is_empty() {
        return;
    }

    println!("\n{}", "=== Sentiment ===".bold());
    for s in sentiments {
        println!("{}", sentiment_line(s.position, &s.sentiment));
    }
}

/// One sentiment line, e.g.
/// `Customer review 1 - Sentiment(polarity=0.8, subjectivity=0.75), Positive`.
pub fn sentiment_line(position: usize, result: &SentimentResult) -> String {
    format!(
        "Customer review {} - Sentiment(polarity={}, subjectivity={}), {}",
        position,
        result.polarity,
        result.subjectivity,
        colorize_label(result.label)
    )
}

pub fn display_similarity(pair: &PairSimilarity, model: &str) {
    println!("\n{}", "----- Similarity -----".bold());
    println!("{}", similarity_line(pair));
    println!("{}", format!("  (model: {model})").dimmed());
}

/// The similarity line, with the score rounded to 2 decimal places.
pub fn similarity_line(pair: &PairSimilarity) -> String {
    format!(
        "Similarity between customer reviews {} and {} is {}.",
        pair.first,
        pair.second,
        round_to(pair.score, 2)
    )
}

fn colorize_label(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green(),
        SentimentLabel::Neutral => label.as_str().yellow(),
        SentimentLabel::Negative => label.as_str().red(),
    }
}
