// Semantic similarity: text embeddings and cosine comparison.

pub mod download;
pub mod embeddings;
pub mod lexical;
pub mod traits;
