//! Command-line interface for gridsynth
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate a data file from a schema
//! gridsynth generate --schema schema.yaml
//!
//! # Override output path, seed, and sparsity from the command line
//! gridsynth generate --schema schema.yaml \
//!   --output /tmp/data.csv --seed 7 --sparsity 0.25
//!
//! # Validate a schema and report the planned row count without writing
//! gridsynth generate --schema schema.yaml --dry-run
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use grid_core::{GridConfig, SparsityConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gridsynth")]
#[command(about = "Synthesizes delimited tabular test data from a dimension/measure schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a delimited data file from a schema
    Generate {
        /// Path to schema YAML file
        #[arg(long, short = 's')]
        schema: PathBuf,

        /// Override the output path from the schema
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Random seed for deterministic generation (same seed = same data)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Override the flush batch size from the schema
        #[arg(long)]
        batch_size: Option<usize>,

        /// Override the sparsity fraction from the schema
        #[arg(long)]
        sparsity: Option<f64>,

        /// Validate the schema and report the planned row count without writing
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            output,
            seed,
            batch_size,
            sparsity,
            dry_run,
        } => {
            let mut config = GridConfig::from_yaml_file(&schema)
                .with_context(|| format!("failed to load schema from '{}'", schema.display()))?;

            if let Some(path) = output {
                config.output.path = path;
            }
            if let Some(size) = batch_size {
                config.output.batch_size = size;
            }
            if let Some(fraction) = sparsity {
                match config.sparsity.as_mut() {
                    Some(target) => target.fraction = fraction,
                    None => {
                        config.sparsity = Some(SparsityConfig {
                            fraction,
                            ..Default::default()
                        })
                    }
                }
            }

            if dry_run {
                config.validate()?;
                info!(
                    "Dry run: schema is valid; would generate {} rows to '{}'",
                    config.total_rows()?,
                    config.output.path.display()
                );
                return Ok(());
            }

            let metrics = gridsynth::run(&config, seed)?;
            info!(
                "Wrote {} rows ({} bytes) to '{}'",
                metrics.rows_written,
                metrics.file_size_bytes,
                config.output.path.display()
            );
        }
    }

    Ok(())
}
