//! Generation pipeline: config in, delimited file out.

use anyhow::Context;
use grid_core::GridConfig;
use grid_generator::GridGenerator;
use grid_sink::{BatchedSink, FileDestination, RowDestination};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Field delimiter of the output file.
pub const FIELD_DELIMITER: char = ',';

/// Metrics from one generation run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Number of data rows written (excluding the header).
    pub rows_written: u64,
    /// Number of measure cells overwritten by sparsity injection.
    pub cells_blanked: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl RunMetrics {
    /// Calculate data rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Run one generation pass for `config`, seeding all randomness from `seed`.
///
/// The destination file is reset once up front and then written append-only,
/// one batch at a time. When sparsity is configured the full grid is
/// materialized so the injector can address it; otherwise rows stream
/// straight to the sink.
pub fn run(config: &GridConfig, seed: u64) -> anyhow::Result<RunMetrics> {
    config.validate()?;

    let start = Instant::now();
    let total = config.total_rows()?;
    info!(
        "Generating {} rows to '{}' (seed {})",
        total,
        config.output.path.display(),
        seed
    );

    let mut destination = FileDestination::new(&config.output.path);
    destination
        .reset()
        .context("failed to reset output destination")?;
    let mut sink = BatchedSink::new(destination, config.output.batch_size);

    sink.push(config.header().join(&FIELD_DELIMITER.to_string()))?;

    let mut generator = GridGenerator::new(config, seed);
    let mut metrics = RunMetrics::default();

    match &config.sparsity {
        Some(sparsity) if sparsity.fraction > 0.0 => {
            // Sparsity needs the whole grid in memory before anything is
            // written, so the injector can address every measure cell.
            let mut grid = generator.grid()?;
            metrics.cells_blanked = generator.inject_sparsity(&mut grid, sparsity)?;
            info!(
                "Blanked {} measure cells (fraction {})",
                metrics.cells_blanked, sparsity.fraction
            );
            for row in &grid {
                sink.push(row.to_record(FIELD_DELIMITER))?;
                metrics.rows_written += 1;
            }
        }
        _ => {
            for row in generator.rows() {
                sink.push(row?.to_record(FIELD_DELIMITER))?;
                metrics.rows_written += 1;
                if metrics.rows_written % 10000 == 0 {
                    debug!("Generated {} rows", metrics.rows_written);
                }
            }
        }
    }

    let (destination, _) = sink.finish()?;
    metrics.file_size_bytes = std::fs::metadata(destination.path())?.len();
    metrics.total_duration = start.elapsed();

    info!(
        "Generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}
