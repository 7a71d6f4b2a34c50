// Sentence embedding similarity model using all-MiniLM-L6-v2.
//
// Embeds review text into 384-dimensional vectors with a sentence
// transformer run locally through ONNX Runtime. Cosine similarity between
// these vectors captures closeness in meaning: "battery died" and "won't
// hold a charge" land near each other despite sharing no words.
//
// Token embeddings are mean-pooled under the attention mask, matching how
// the model was trained.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::traits::SimilarityModel;

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Local ONNX sentence embedder.
///
/// `ort::Session::run` takes `&mut self`, so the session sits behind a
/// Mutex to keep `embed` callable through a shared reference.
pub struct SentenceEmbedder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl SentenceEmbedder {
    /// Load the sentence embedding model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory.
    /// Run `reviewlens download-model` first if they don't exist.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            anyhow::bail!(
                "Embedding model not found: {}\nRun `reviewlens download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Embedding tokenizer not found: {}\nRun `reviewlens download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| {
                format!(
                    "Failed to load embedding model from {}",
                    model_path.display()
                )
            })?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load embedding tokenizer: {}", e))?;

        debug!(
            "Loaded sentence embedding model from {}",
            model_dir.display()
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }

    /// Embed a batch of texts into 384-dimensional vectors, one per text.
    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let encodings = texts
            .iter()
            .map(|t| {
                self.tokenizer
                    .encode(*t, true)
                    .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
            })
            .collect::<Result<Vec<_>>>()?;

        let batch_size = encodings.len();
        let max_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0);

        if max_len == 0 {
            return Ok(vec![vec![0.0; EMBEDDING_DIM]; batch_size]);
        }

        // BERT inputs, padded to the longest sequence:
        //   input_ids: token IDs (pad with 0)
        //   attention_mask: 1 for real tokens, 0 for padding
        //   token_type_ids: all zeros for single-sentence input
        let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
        let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
        let mut token_type_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

        for enc in &encodings {
            let ids = enc.get_ids();
            let mask = enc.get_attention_mask();
            let seq_len = ids.len();
            let pad_len = max_len - seq_len;

            input_ids_flat.extend(ids.iter().map(|&id| id as i64));
            input_ids_flat.extend(std::iter::repeat_n(0i64, pad_len));
            attention_mask_flat.extend(mask.iter().map(|&m| m as i64));
            attention_mask_flat.extend(std::iter::repeat_n(0i64, pad_len));
            token_type_ids_flat.extend(std::iter::repeat_n(0i64, max_len));
        }

        let shape = [batch_size as i64, max_len as i64];

        let input_ids_tensor = Tensor::from_array((shape, input_ids_flat))
            .context("Failed to create input_ids tensor")?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat.clone()))
            .context("Failed to create attention_mask tensor")?;
        let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids_flat))
            .context("Failed to create token_type_ids tensor")?;

        // Output is last_hidden_state: [batch, seq_len, 384]
        let hidden_states = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

            let outputs = session
                .run(ort::inputs! {
                    "input_ids" => input_ids_tensor,
                    "attention_mask" => attention_mask_tensor,
                    "token_type_ids" => token_type_ids_tensor
                })
                .context("Embedding ONNX inference failed")?;

            let (_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .context("Failed to extract embedding output tensor")?;

            data.to_vec()
        };

        let embeddings = (0..batch_size)
            .map(|i| {
                mean_pool(
                    &hidden_states,
                    &attention_mask_flat[i * max_len..(i + 1) * max_len],
                    i * max_len,
                )
            })
            .collect();

        debug!(batch_size, dim = EMBEDDING_DIM, "Computed sentence embeddings");

        Ok(embeddings)
    }
}

/// Average the token embeddings of one sequence, weighted by its attention
/// mask. `token_offset` is the sequence's first token position in the
/// flattened `[batch * seq_len, EMBEDDING_DIM]` hidden state buffer.
pub fn mean_pool(hidden_states: &[f32], mask: &[i64], token_offset: usize) -> Vec<f64> {
    let mut sum = vec![0.0_f64; EMBEDDING_DIM];
    let mut mask_sum = 0.0_f64;

    for (j, &m) in mask.iter().enumerate() {
        if m == 0 {
            continue;
        }
        let weight = m as f64;
        mask_sum += weight;
        let offset = (token_offset + j) * EMBEDDING_DIM;
        for (k, acc) in sum.iter_mut().enumerate() {
            *acc += hidden_states[offset + k] as f64 * weight;
        }
    }

    if mask_sum > 0.0 {
        for val in &mut sum {
            *val /= mask_sum;
        }
    }

    sum
}

impl SimilarityModel for SentenceEmbedder {
    fn name(&self) -> &'static str {
        "all-MiniLM-L6-v2"
    }

    fn embed(&self, text: &str) -> Result<Vec<f64>> {
        self.embed_batch(&[text])?
            .pop()
            .context("Embedding model returned no vector")
    }
}
