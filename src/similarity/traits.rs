// Similarity model trait and the pairwise comparison built on it.
//
// A model only has to turn text into a vector. Comparison is always cosine
// similarity, clamped to [0, 1], so models are interchangeable without
// changing what a score means.

use anyhow::Result;
use tracing::debug;

use crate::error::{ComparisonError, Side};

/// Trait for embedding text into a dense vector.
pub trait SimilarityModel {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn embed(&self, text: &str) -> Result<Vec<f64>>;
}

/// Cosine similarity between two vectors, clamped to [0, 1].
///
/// Unlike a plain dot-product helper this refuses inputs the measure is not
/// defined for instead of returning 0.0 for them.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, ComparisonError> {
    if a.len() != b.len() {
        return Err(ComparisonError::DimensionMismatch {
            first: a.len(),
            second: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a < f64::EPSILON {
        return Err(ComparisonError::ZeroVector(Side::First));
    }
    if mag_b < f64::EPSILON {
        return Err(ComparisonError::ZeroVector(Side::Second));
    }

    Ok((dot / (mag_a * mag_b)).clamp(0.0, 1.0))
}

/// Semantic similarity of two normalized review texts.
///
/// Fails with [`ComparisonError::EmptyInput`] before touching the model if
/// either text is empty. The score is unrounded.
pub fn similarity(model: &dyn SimilarityModel, first: &str, second: &str) -> Result<f64> {
    if first.trim().is_empty() {
        return Err(ComparisonError::EmptyInput(Side::First).into());
    }
    if second.trim().is_empty() {
        return Err(ComparisonError::EmptyInput(Side::Second).into());
    }

    let a = model.embed(first)?;
    let b = model.embed(second)?;
    let score = cosine_similarity(&a, &b)?;

    debug!(model = model.name(), score, "Computed similarity");
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let a = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&a, &a).unwrap();
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_cosine_proportional() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_opposite_clamps_to_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
        assert!(sim.abs() < f64::EPSILON, "got {sim}");
    }

    #[test]
    fn test_cosine_zero_vector_is_error() {
        let err = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, ComparisonError::ZeroVector(Side::First));
        let err = cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]).unwrap_err();
        assert_eq!(err, ComparisonError::ZeroVector(Side::Second));
    }

    #[test]
    fn test_cosine_mismatched_dimensions() {
        let err = cosine_similarity(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ComparisonError::DimensionMismatch {
                first: 1,
                second: 2
            }
        );
    }

    #[test]
    fn test_cosine_empty_vectors() {
        let err = cosine_similarity(&[], &[]).unwrap_err();
        assert_eq!(err, ComparisonError::ZeroVector(Side::First));
    }
}
