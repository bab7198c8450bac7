//! Main generator producing rows from a grid configuration.

use crate::columns::{CategoryColumn, ColumnError, MeasureColumn};
use crate::enumerate::CartesianEnumerator;
use crate::sparsity;
use grid_core::{GridConfig, Row, SparsityConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A column function failed while building a row
    #[error("Column evaluation failed: {0}")]
    ColumnEvaluation(#[from] ColumnError),

    /// The sparsity target could not be reached within the attempt cap
    #[error(
        "Sparsity target of {target} cells could not be reached after {attempts} attempts; \
         the sentinel may already populate too much of the grid"
    )]
    SparsityUnsatisfiable { target: u64, attempts: u64 },
}

/// Generator that produces rows for the Cartesian product of the configured
/// dimensions.
///
/// Uses a seeded random number generator so that the same seed and config
/// produce identical output across runs.
pub struct GridGenerator {
    categories: Vec<CategoryColumn>,
    measures: Vec<MeasureColumn>,
    rng: StdRng,
}

impl GridGenerator {
    /// Create a generator from a config and a random seed.
    pub fn new(config: &GridConfig, seed: u64) -> Self {
        Self {
            categories: config
                .dimensions
                .iter()
                .map(CategoryColumn::from_config)
                .collect(),
            measures: config
                .measures
                .iter()
                .map(MeasureColumn::from_config)
                .collect(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the row for one index combination.
    ///
    /// Category values are rendered first, in column order; measures are then
    /// computed against those rendered texts, in column order.
    pub fn build_row(&mut self, combination: &[u64]) -> Result<Row, GeneratorError> {
        let mut categories = Vec::with_capacity(self.categories.len());
        for (column, &index) in self.categories.iter().zip(combination) {
            categories.push(column.value_at(index)?);
        }

        let mut measures = Vec::with_capacity(self.measures.len());
        for column in &self.measures {
            measures.push(column.compute(&categories, &mut self.rng)?);
        }

        Ok(Row::new(categories, measures))
    }

    /// Lazily enumerate all rows in combination order.
    pub fn rows(&mut self) -> Rows<'_> {
        let enumerator = CartesianEnumerator::new(
            self.categories
                .iter()
                .map(CategoryColumn::cardinality)
                .collect(),
        );
        Rows {
            generator: self,
            enumerator,
        }
    }

    /// Materialize the full grid of rows.
    ///
    /// Required when sparsity injection will run afterwards; for plain
    /// streaming output prefer [`GridGenerator::rows`].
    pub fn grid(&mut self) -> Result<Vec<Row>, GeneratorError> {
        self.rows().collect()
    }

    /// Overwrite the configured fraction of measure cells in `grid` with the
    /// sentinel, returning how many cells were replaced.
    pub fn inject_sparsity(
        &mut self,
        grid: &mut [Row],
        config: &SparsityConfig,
    ) -> Result<u64, GeneratorError> {
        sparsity::inject(grid, config.fraction, &config.sentinel, &mut self.rng)
    }
}

/// Iterator that lazily builds rows in enumeration order.
pub struct Rows<'a> {
    generator: &'a mut GridGenerator,
    enumerator: CartesianEnumerator,
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        let combination = self.enumerator.next()?;
        Some(self.generator.build_row(&combination))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.enumerator.size_hint()
    }
}
