//! gridsynth: synthesizes delimited tabular test data.
//!
//! A `grid_core::GridConfig` describes categorical dimensions and measure
//! columns; the pipeline enumerates their Cartesian product, computes
//! measures per row, optionally blanks a fraction of measure cells, and
//! streams the rows to a CSV-style file in bounded-memory batches.

pub mod pipeline;

pub use pipeline::{run, RunMetrics};
