//! Column model: category and measure columns built from configuration.

use crate::values;
use grid_core::{DimensionConfig, DimensionKind, MeasureConfig};
use rand::Rng;

/// Error type for column evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    /// A column's value function failed for one index
    #[error("Column '{column}' failed to evaluate at index {index}: {reason}")]
    Evaluation {
        column: String,
        index: u64,
        reason: String,
    },
}

/// A categorical axis: a finite cardinality and a value-naming rule.
#[derive(Debug, Clone)]
pub struct CategoryColumn {
    name: String,
    cardinality: u64,
    kind: DimensionKind,
}

impl CategoryColumn {
    /// Build a category column from its configuration.
    pub fn from_config(config: &DimensionConfig) -> Self {
        Self {
            name: config.name.clone(),
            cardinality: config.cardinality,
            kind: config.kind.clone(),
        }
    }

    /// Column name, used as the header field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct values on this axis.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// Render the value at `index`.
    ///
    /// Deterministic over `[0, cardinality)`: the same index always renders
    /// the same text.
    pub fn value_at(&self, index: u64) -> Result<String, ColumnError> {
        match &self.kind {
            DimensionKind::Label { template } => Ok(values::format_label(
                &self.name,
                template.as_deref(),
                index,
            )),
            DimensionKind::Date { epoch } => {
                values::format_date(*epoch, index).ok_or_else(|| ColumnError::Evaluation {
                    column: self.name.clone(),
                    index,
                    reason: "date falls outside the supported calendar range".to_string(),
                })
            }
        }
    }
}

/// A measure column: a random value computed per row.
#[derive(Debug, Clone)]
pub struct MeasureColumn {
    name: String,
    lower: f64,
    upper: f64,
    precision: f64,
    scale: usize,
}

impl MeasureColumn {
    /// Build a measure column from its configuration.
    pub fn from_config(config: &MeasureConfig) -> Self {
        Self {
            name: config.name.clone(),
            lower: config.lower,
            upper: config.upper,
            precision: config.precision,
            scale: values::scale_for_precision(config.precision),
        }
    }

    /// Column name, used as the header field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compute this measure for one row.
    ///
    /// The rendered category values of the current row are passed in so a
    /// measure can depend on category identity; the uniform measure ignores
    /// them but the seam is part of the contract.
    pub fn compute<R: Rng>(
        &self,
        _category_values: &[String],
        rng: &mut R,
    ) -> Result<String, ColumnError> {
        Ok(values::generate_measure(
            rng,
            self.lower,
            self.upper,
            self.precision,
            self.scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn label_config() -> DimensionConfig {
        DimensionConfig {
            name: "category".to_string(),
            cardinality: 10,
            kind: DimensionKind::Label { template: None },
        }
    }

    #[test]
    fn test_label_column_values() {
        let column = CategoryColumn::from_config(&label_config());

        assert_eq!(column.name(), "category");
        assert_eq!(column.cardinality(), 10);
        assert_eq!(column.value_at(0).unwrap(), "category_0");
        assert_eq!(column.value_at(9).unwrap(), "category_9");
    }

    #[test]
    fn test_value_at_is_deterministic() {
        let column = CategoryColumn::from_config(&label_config());
        assert_eq!(column.value_at(3).unwrap(), column.value_at(3).unwrap());
    }

    #[test]
    fn test_date_column_values() {
        let column = CategoryColumn::from_config(&DimensionConfig {
            name: "day".to_string(),
            cardinality: 30,
            kind: DimensionKind::Date {
                epoch: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            },
        });

        assert_eq!(column.value_at(0).unwrap(), "01/01/2020");
        assert_eq!(column.value_at(29).unwrap(), "01/30/2020");
    }

    #[test]
    fn test_date_overflow_is_an_evaluation_error() {
        let column = CategoryColumn::from_config(&DimensionConfig {
            name: "day".to_string(),
            cardinality: 3,
            kind: DimensionKind::Date {
                epoch: NaiveDate::MAX,
            },
        });

        let err = column.value_at(2).unwrap_err();
        assert!(matches!(err, ColumnError::Evaluation { index: 2, .. }));
    }

    #[test]
    fn test_measure_compute_in_bounds() {
        let column = MeasureColumn::from_config(&MeasureConfig {
            name: "sales".to_string(),
            lower: -100.0,
            upper: 100.0,
            precision: 0.001,
        });
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let text = column.compute(&[], &mut rng).unwrap();
            let value: f64 = text.parse().unwrap();
            assert!((-100.0..100.0).contains(&value));
        }
    }
}
