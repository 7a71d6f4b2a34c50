// Review dataset loading: CSV rows in, filtered review records out.

pub mod loader;
pub mod models;
