//! Configuration schema for grid generation.
//!
//! A `GridConfig` fully describes one generation run: the ordered categorical
//! dimensions whose Cartesian product forms the rows, the measure columns
//! computed per row, the optional sparsity target, and the output settings.
//! Configs are loaded from YAML files; every knob the generator consumes
//! lives here rather than in process-wide state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of rows buffered before each flush to the destination.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Schema format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Categorical dimensions, in declaration (and output column) order
    pub dimensions: Vec<DimensionConfig>,

    /// Measure columns, in declaration (and output column) order
    #[serde(default)]
    pub measures: Vec<MeasureConfig>,

    /// Optional sparsity target applied to measure cells
    #[serde(default)]
    pub sparsity: Option<SparsityConfig>,

    /// Output destination settings
    pub output: OutputConfig,
}

/// One categorical dimension: a name, a cardinality, and a value-naming rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionConfig {
    /// Dimension name, used as the header and in default labels
    pub name: String,

    /// Number of distinct values on this axis
    pub cardinality: u64,

    /// How indices on this axis are rendered to text
    #[serde(default)]
    pub kind: DimensionKind,
}

/// Value-naming rule for a dimension, selected at configuration time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DimensionKind {
    /// Sequential labels: `<name>_<index>`, or a template with `{name}` and
    /// `{index}` placeholders
    Label {
        #[serde(default)]
        template: Option<String>,
    },

    /// Calendar dates: index `i` maps to `epoch + i` days, rendered as
    /// `MM/DD/YYYY`
    Date { epoch: NaiveDate },
}

impl Default for DimensionKind {
    fn default() -> Self {
        DimensionKind::Label { template: None }
    }
}

/// One measure column: uniform draws in `[lower, upper)` snapped to
/// multiples of `precision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Measure name, used as the header
    pub name: String,

    /// Inclusive lower bound of the draw range
    pub lower: f64,

    /// Exclusive upper bound of the draw range
    pub upper: f64,

    /// Grid step values are snapped to
    pub precision: f64,
}

/// Sparsity target: the fraction of measure cells overwritten with a sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparsityConfig {
    /// Fraction of measure cells to overwrite, in `[0, 1]`
    pub fraction: f64,

    /// Replacement text written into selected cells
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for SparsityConfig {
    fn default() -> Self {
        Self {
            fraction: 0.0,
            sentinel: default_sentinel(),
        }
    }
}

/// Output destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated file
    pub path: PathBuf,

    /// Number of rows buffered before each flush
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_version() -> u32 {
    1
}

fn default_sentinel() -> String {
    "0".to_string()
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl GridConfig {
    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check the config for semantic errors that parsing cannot catch.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.dimensions.is_empty() {
            return Err(SchemaError::Invalid(
                "at least one dimension is required".to_string(),
            ));
        }
        for measure in &self.measures {
            if measure.upper <= measure.lower {
                return Err(SchemaError::Invalid(format!(
                    "measure '{}': upper bound {} must exceed lower bound {}",
                    measure.name, measure.upper, measure.lower
                )));
            }
            if !(measure.precision > 0.0) {
                return Err(SchemaError::Invalid(format!(
                    "measure '{}': precision must be positive, got {}",
                    measure.name, measure.precision
                )));
            }
        }
        if let Some(sparsity) = &self.sparsity {
            if !(0.0..=1.0).contains(&sparsity.fraction) {
                return Err(SchemaError::Invalid(format!(
                    "sparsity fraction must be in [0, 1], got {}",
                    sparsity.fraction
                )));
            }
        }
        if self.output.batch_size == 0 {
            return Err(SchemaError::Invalid(
                "output batch_size must be at least 1".to_string(),
            ));
        }
        // Row count must fit in u64 for the enumerator's accounting
        self.total_rows()?;
        Ok(())
    }

    /// Header fields: dimension names followed by measure names, in
    /// declaration order.
    pub fn header(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .map(|d| d.name.clone())
            .chain(self.measures.iter().map(|m| m.name.clone()))
            .collect()
    }

    /// Cardinalities of all dimensions, in declaration order.
    pub fn cardinalities(&self) -> Vec<u64> {
        self.dimensions.iter().map(|d| d.cardinality).collect()
    }

    /// Total number of data rows: the product of all cardinalities.
    pub fn total_rows(&self) -> Result<u64, SchemaError> {
        self.dimensions
            .iter()
            .try_fold(1u64, |acc, d| acc.checked_mul(d.cardinality))
            .ok_or_else(|| {
                SchemaError::Invalid("dimension cardinality product overflows u64".to_string())
            })
    }
}
