// Analysis context: the models a run needs, built once and passed around.
//
// Holds the normalizer, sentiment model and similarity model as explicit
// values so nothing in the pipeline reaches for global state. Models sit
// behind traits so tests can swap in fixed or lexical ones.

use anyhow::Result;
use tracing::{info, warn};

use crate::config::{Config, SimilarityBackend};
use crate::sentiment::analyzer::LexiconAnalyzer;
use crate::sentiment::classifier::{classify, SentimentResult};
use crate::sentiment::traits::SentimentModel;
use crate::similarity::download;
use crate::similarity::embeddings::SentenceEmbedder;
use crate::similarity::lexical::LexicalModel;
use crate::similarity::traits::{similarity, SimilarityModel};
use crate::text::normalizer::TextNormalizer;

pub struct AnalysisContext {
    pub normalizer: TextNormalizer,
    pub sentiment: Box<dyn SentimentModel>,
    pub similarity: Box<dyn SimilarityModel>,
}

impl AnalysisContext {
    pub fn new(
        normalizer: TextNormalizer,
        sentiment: Box<dyn SentimentModel>,
        similarity: Box<dyn SimilarityModel>,
    ) -> Self {
        Self {
            normalizer,
            sentiment,
            similarity,
        }
    }

    /// Context that needs no model files: English stop-words, the bundled
    /// lexicon and lexical similarity.
    pub fn lexical() -> Self {
        Self::new(
            TextNormalizer::english(),
            Box::new(LexiconAnalyzer),
            Box::new(LexicalModel),
        )
    }

    /// Build the context described by the configuration.
    ///
    /// With the ONNX backend selected but no model files on disk (or a model
    /// that fails to load), similarity falls back to the lexical model with
    /// a warning rather than failing the run.
    pub fn from_config(config: &Config) -> Result<Self> {
        let similarity: Box<dyn SimilarityModel> = match config.similarity_backend {
            SimilarityBackend::Lexical => Box::new(LexicalModel),
            SimilarityBackend::Onnx => load_embedder(config),
        };

        info!(similarity = similarity.name(), "Analysis models ready");

        Ok(Self::new(
            TextNormalizer::english(),
            Box::new(LexiconAnalyzer),
            similarity,
        ))
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Classify `text`. The pipeline passes normalized text; passing the
    /// review as written lets negations and intensifiers count.
    pub fn classify(&self, text: &str) -> Result<SentimentResult> {
        classify(self.sentiment.as_ref(), text)
    }

    /// Unrounded similarity of two normalized texts.
    pub fn compare(&self, first: &str, second: &str) -> Result<f64> {
        similarity(self.similarity.as_ref(), first, second)
    }
}

fn load_embedder(config: &Config) -> Box<dyn SimilarityModel> {
    if !download::embedding_files_present(&config.model_dir) {
        warn!(
            model_dir = %config.model_dir.display(),
            "Embedding model not downloaded, using lexical similarity. \
             Run `reviewlens download-model` for semantic similarity."
        );
        return Box::new(LexicalModel);
    }

    let embed_dir = download::embedding_model_dir(&config.model_dir);
    match SentenceEmbedder::load(&embed_dir) {
        Ok(embedder) => {
            info!("Loaded sentence embedding model");
            Box::new(embedder)
        }
        Err(e) => {
            warn!("Failed to load embedding model, falling back to lexical similarity: {e}");
            Box::new(LexicalModel)
        }
    }
}
