use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::reviews::loader::DEFAULT_TEXT_COLUMN;
use crate::similarity::download;

/// Which similarity model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBackend {
    /// Local ONNX sentence embedder (default); falls back to lexical if the
    /// model files are missing
    Onnx,
    /// Hashed term-frequency vectors, no model files needed
    Lexical,
}

impl SimilarityBackend {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "onnx" => Ok(SimilarityBackend::Onnx),
            "lexical" => Ok(SimilarityBackend::Lexical),
            other => anyhow::bail!(
                "Unknown similarity backend '{other}'. Expected 'onnx' or 'lexical'."
            ),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default; command-line flags override what's loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the review CSV
    pub csv_path: PathBuf,
    /// Header name of the review text column
    pub text_column: String,
    /// Directory containing downloaded model files
    pub model_dir: PathBuf,
    pub similarity_backend: SimilarityBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("./amazon_product_reviews.csv"),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            model_dir: download::default_model_dir(),
            similarity_backend: SimilarityBackend::Onnx,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let similarity_backend = match env::var("REVIEWLENS_SIMILARITY") {
            Ok(v) => SimilarityBackend::parse(&v)?,
            Err(_) => defaults.similarity_backend,
        };

        Ok(Self {
            csv_path: env::var("REVIEWLENS_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
            text_column: env::var("REVIEWLENS_TEXT_COLUMN").unwrap_or(defaults.text_column),
            model_dir: env::var("REVIEWLENS_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
            similarity_backend,
        })
    }

    /// Check that the review file exists before starting a run.
    pub fn require_csv(&self) -> Result<()> {
        if !self.csv_path.exists() {
            anyhow::bail!(
                "Review file not found: {}\n\
                 Pass --csv or set REVIEWLENS_CSV_PATH in your .env file.",
                self.csv_path.display()
            );
        }
        Ok(())
    }
}
