// reviewlens: sentiment and similarity analysis for product review datasets.
//
// This is the library root. Each module is one stage of the analysis
// pipeline; `pipeline` wires them together and `output` renders results.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod reviews;
pub mod sentiment;
pub mod similarity;
pub mod text;
