// Batch analysis over a review table.
//
// The run is all-or-nothing: any failure after loading (a missing review
// row for the similarity pair, an empty comparison, a model error) aborts
// it. Rows with null text are the only thing ever skipped, and that happens
// in the loader.
//
// Nothing here prints; the result is an AnalysisReport that the output
// layer renders.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use super::context::AnalysisContext;
use crate::reviews::loader::load_reviews;
use crate::reviews::models::ReviewTable;
use crate::sentiment::classifier::SentimentResult;
use crate::text::normalizer::NormalizedReview;

/// How much of the table to report on.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Number of normalized reviews to include in the preview
    pub preview: usize,
    /// Number of leading reviews to classify
    pub sample: usize,
    /// Original row indices of the two reviews to compare, if any
    pub pair: Option<(usize, usize)>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            preview: 10,
            sample: 5,
            pair: Some((5, 150)),
        }
    }
}

/// Sentiment of one sampled review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSentiment {
    /// 1-based position among surviving reviews
    pub position: usize,
    /// Original row index
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub sentiment: SentimentResult,
}

/// Similarity between the two chosen reviews. The score is unrounded.
#[derive(Debug, Clone, Serialize)]
pub struct PairSimilarity {
    pub first: usize,
    pub second: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub similarity_model: String,
    pub normalized_preview: Vec<NormalizedReview>,
    pub sentiments: Vec<ReviewSentiment>,
    pub similarity: Option<PairSimilarity>,
}

/// Load the CSV at `path` and analyze it.
pub fn analyze_file(
    ctx: &AnalysisContext,
    path: &Path,
    text_column: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisReport> {
    let table = load_reviews(path, text_column)
        .with_context(|| format!("Failed to load reviews from {}", path.display()))?;
    analyze_table(ctx, &table, options)
}

/// Analyze an already-loaded review table.
pub fn analyze_table(
    ctx: &AnalysisContext,
    table: &ReviewTable,
    options: &AnalysisOptions,
) -> Result<AnalysisReport> {
    let normalized = normalize_with_progress(ctx, table);

    let sentiments = normalized
        .iter()
        .take(options.sample)
        .enumerate()
        .map(|(i, review)| {
            let sentiment = ctx
                .classify(&review.text)
                .with_context(|| format!("Failed to score review row {}", review.index))?;
            Ok(ReviewSentiment {
                position: i + 1,
                index: review.index,
                text: review.text.clone(),
                sentiment,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let similarity = match options.pair {
        Some((first, second)) => Some(compare_rows(ctx, &normalized, first, second)?),
        None => None,
    };

    info!(
        rows_kept = table.len(),
        sampled = sentiments.len(),
        compared = similarity.is_some(),
        "Analysis complete"
    );

    Ok(AnalysisReport {
        generated_at: Utc::now(),
        rows_read: table.rows_read(),
        rows_kept: table.len(),
        similarity_model: ctx.similarity.name().to_string(),
        normalized_preview: normalized.iter().take(options.preview).cloned().collect(),
        sentiments,
        similarity,
    })
}

/// Look up a normalized review by its original row index.
pub fn find_normalized(normalized: &[NormalizedReview], index: usize) -> Option<&NormalizedReview> {
    normalized
        .binary_search_by_key(&index, |r| r.index)
        .ok()
        .map(|pos| &normalized[pos])
}

fn compare_rows(
    ctx: &AnalysisContext,
    normalized: &[NormalizedReview],
    first: usize,
    second: usize,
) -> Result<PairSimilarity> {
    let lookup = |index: usize| {
        find_normalized(normalized, index).with_context(|| {
            format!("Review row {index} not found (out of range or missing text)")
        })
    };
    let a = lookup(first)?;
    let b = lookup(second)?;

    let score = ctx
        .compare(&a.text, &b.text)
        .with_context(|| format!("Failed to compare review rows {first} and {second}"))?;

    Ok(PairSimilarity {
        first,
        second,
        score,
    })
}

fn normalize_with_progress(ctx: &AnalysisContext, table: &ReviewTable) -> Vec<NormalizedReview> {
    let pb = ProgressBar::new(table.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("  Normalizing [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("=> "));
    }

    let normalized = table
        .records()
        .iter()
        .map(|record| {
            pb.inc(1);
            ctx.normalizer.normalize_record(record)
        })
        .collect();

    pb.finish_and_clear();
    normalized
}
