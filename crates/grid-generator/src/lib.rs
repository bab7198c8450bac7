//! Row generation engine for gridsynth.
//!
//! This crate turns a `grid_core::GridConfig` into rows: it enumerates the
//! Cartesian product of the configured dimensions with a mixed-radix
//! odometer, renders category and measure values per combination, and can
//! overwrite a target fraction of measure cells with a sentinel.
//!
//! # Architecture
//!
//! ```text
//! GridConfig (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  GridGenerator   │
//! │                  │
//! │  - columns       │──── CartesianEnumerator (odometer over cardinalities)
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!     Row { categories, measures }
//!          │
//!          ▼ (optional, requires the materialized grid)
//!     sparsity::inject
//! ```
//!
//! # Example
//!
//! ```rust
//! use grid_core::GridConfig;
//! use grid_generator::GridGenerator;
//!
//! let config = GridConfig::from_yaml(r#"
//! dimensions:
//!   - name: region
//!     cardinality: 3
//!   - name: quarter
//!     cardinality: 2
//! measures:
//!   - name: sales
//!     lower: 0.0
//!     upper: 100.0
//!     precision: 0.01
//! output:
//!   path: out.csv
//! "#).unwrap();
//!
//! let mut generator = GridGenerator::new(&config, 42);
//! let rows = generator.grid().unwrap();
//! assert_eq!(rows.len(), 6);
//! assert_eq!(rows[0].categories(), ["region_0", "quarter_0"]);
//! ```

pub mod columns;
pub mod enumerate;
pub mod generator;
pub mod sparsity;
pub mod values;

// Re-exports for convenience
pub use columns::{CategoryColumn, ColumnError, MeasureColumn};
pub use enumerate::CartesianEnumerator;
pub use generator::{GeneratorError, GridGenerator, Rows};
