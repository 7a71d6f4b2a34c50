// Analysis pipeline: load, normalize, classify, compare.

pub mod analysis;
pub mod context;
