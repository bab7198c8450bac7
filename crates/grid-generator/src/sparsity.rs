//! Sparsity injection: overwriting a fraction of measure cells with a
//! sentinel to simulate missing data.

use crate::generator::GeneratorError;
use grid_core::Row;
use rand::Rng;

/// Attempts allowed per cell before rejection sampling gives up.
const MAX_ATTEMPTS_PER_CELL: u64 = 64;

/// Overwrite `round(fraction x cells)` distinct measure cells with `sentinel`.
///
/// Cells are picked by uniform rejection sampling over (row, measure-column)
/// pairs: a pick whose cell already holds the sentinel does not count and is
/// retried, so exactly the target number of cells change. Category cells are
/// never addressed. A grid with no measure cells satisfies any target
/// trivially. Sampling is capped at [`MAX_ATTEMPTS_PER_CELL`] attempts per
/// cell; exceeding the cap fails with
/// [`GeneratorError::SparsityUnsatisfiable`] instead of looping forever.
///
/// Returns the number of cells replaced.
pub fn inject<R: Rng>(
    grid: &mut [Row],
    fraction: f64,
    sentinel: &str,
    rng: &mut R,
) -> Result<u64, GeneratorError> {
    let rows = grid.len() as u64;
    let columns = grid.first().map_or(0, Row::measure_count) as u64;
    let cells = rows.saturating_mul(columns);

    let target = (fraction * cells as f64).round() as u64;
    if cells == 0 || target == 0 {
        return Ok(0);
    }

    let max_attempts = cells.saturating_mul(MAX_ATTEMPTS_PER_CELL);
    let mut replaced = 0u64;
    let mut attempts = 0u64;

    while replaced < target {
        if attempts >= max_attempts {
            return Err(GeneratorError::SparsityUnsatisfiable { target, attempts });
        }
        attempts += 1;

        let r = rng.random_range(0..grid.len());
        let c = rng.random_range(0..grid[r].measure_count());
        if let Some(cell) = grid[r].measure_mut(c) {
            if cell.as_str() != sentinel {
                *cell = sentinel.to_string();
                replaced += 1;
            }
        }
    }

    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// 10 rows x 4 measure cells, every cell distinct and non-sentinel.
    fn test_grid() -> Vec<Row> {
        (0..10)
            .map(|r| {
                Row::new(
                    vec![format!("category_{r}")],
                    (0..4).map(|c| format!("{r}.{c}")).collect(),
                )
            })
            .collect()
    }

    fn count_sentinels(grid: &[Row], sentinel: &str) -> usize {
        grid.iter()
            .flat_map(|r| r.measures())
            .filter(|cell| cell.as_str() == sentinel)
            .count()
    }

    #[test]
    fn test_replaces_exactly_the_target_count() {
        let mut grid = test_grid();
        let mut rng = StdRng::seed_from_u64(42);

        let replaced = inject(&mut grid, 0.25, "0", &mut rng).unwrap();

        assert_eq!(replaced, 10);
        assert_eq!(count_sentinels(&grid, "0"), 10);
    }

    #[test]
    fn test_categories_are_never_touched() {
        let mut grid = test_grid();
        let mut rng = StdRng::seed_from_u64(42);

        inject(&mut grid, 0.5, "0", &mut rng).unwrap();

        for (r, row) in grid.iter().enumerate() {
            assert_eq!(row.categories(), [format!("category_{r}")]);
        }
    }

    #[test]
    fn test_already_sentinel_cells_do_not_count() {
        let mut grid = test_grid();
        // Pre-populate 5 cells with the sentinel
        for r in 0..5 {
            *grid[r].measure_mut(0).unwrap() = "0".to_string();
        }
        let mut rng = StdRng::seed_from_u64(42);

        let replaced = inject(&mut grid, 0.25, "0", &mut rng).unwrap();

        // 10 fresh replacements on top of the 5 pre-existing sentinels
        assert_eq!(replaced, 10);
        assert_eq!(count_sentinels(&grid, "0"), 15);
    }

    #[test]
    fn test_zero_fraction_is_a_no_op() {
        let mut grid = test_grid();
        let before = grid.clone();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(inject(&mut grid, 0.0, "0", &mut rng).unwrap(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_grid_satisfies_any_target() {
        let mut grid: Vec<Row> = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(inject(&mut grid, 0.9, "0", &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_grid_without_measure_cells_satisfies_any_target() {
        let mut grid = vec![Row::new(vec!["category_0".to_string()], vec![])];
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(inject(&mut grid, 0.9, "0", &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_full_fraction_fills_every_cell() {
        let mut grid = test_grid();
        let mut rng = StdRng::seed_from_u64(42);

        let replaced = inject(&mut grid, 1.0, "0", &mut rng).unwrap();

        assert_eq!(replaced, 40);
        assert_eq!(count_sentinels(&grid, "0"), 40);
    }

    #[test]
    fn test_unreachable_target_fails_instead_of_hanging() {
        // Every cell already holds the sentinel, so no pick can ever count
        let mut grid = vec![Row::new(vec![], vec!["0".to_string()])];
        let mut rng = StdRng::seed_from_u64(42);

        let result = inject(&mut grid, 1.0, "0", &mut rng);

        assert!(matches!(
            result,
            Err(GeneratorError::SparsityUnsatisfiable { target: 1, .. })
        ));
    }
}
