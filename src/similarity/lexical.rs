// Lexical fallback similarity model.
//
// Embeds text as a term-frequency vector over hashed word tokens, scaled to
// unit length. Two reviews only score high if they share words, so this is a
// weaker notion of "semantic" than the sentence embedder. It needs no model
// files, which makes it the fallback when the ONNX model isn't downloaded.
//
// Punctuation tokens are ignored; a text made only of punctuation embeds to
// the zero vector.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::Result;

use super::traits::SimilarityModel;
use crate::text::tokenizer::tokenize;

/// Number of hash buckets in a lexical embedding.
pub const LEXICAL_DIM: usize = 4096;

#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalModel;

fn bucket(token: &str) -> usize {
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    (hasher.finish() % LEXICAL_DIM as u64) as usize
}

impl SimilarityModel for LexicalModel {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let lowered = text.to_lowercase();
        let mut vector = vec![0.0_f64; LEXICAL_DIM];

        for token in tokenize(&lowered).filter(|t| t.chars().any(char::is_alphanumeric)) {
            vector[bucket(token)] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for val in &mut vector {
                *val /= norm;
            }
        }

        Ok(vector)
    }
}
