//! Core types for the gridsynth data generation framework.
//!
//! This crate defines the configuration schema (parsed from YAML) that
//! describes a tabular dataset as an ordered list of categorical dimensions
//! and computed measure columns, plus the `Row` value that flows through the
//! generation pipeline.
//!
//! # Schema example
//!
//! ```yaml
//! version: 1
//! dimensions:
//!   - name: category
//!     cardinality: 200
//!   - name: day
//!     cardinality: 30
//!     kind:
//!       type: date
//!       epoch: 2020-01-01
//! measures:
//!   - name: sales
//!     lower: -100.0
//!     upper: 100.0
//!     precision: 0.001
//! sparsity:
//!   fraction: 0.1
//!   sentinel: "0"
//! output:
//!   path: data.csv
//!   batch_size: 10000
//! ```

pub mod row;
pub mod schema;

// Re-exports for convenience
pub use row::Row;
pub use schema::{
    DimensionConfig, DimensionKind, GridConfig, MeasureConfig, OutputConfig, SchemaError,
    SparsityConfig, DEFAULT_BATCH_SIZE,
};
