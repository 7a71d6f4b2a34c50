// Text normalization: tokenization and stop-word removal.

pub mod normalizer;
pub mod tokenizer;
