//! Domain vocabulary: what a cell is, which fields exist, how a run is configured.

pub mod cells;
pub mod fields;
pub mod config;
