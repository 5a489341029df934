//! Writes the research fixture scripts.
//!
//! With no flags, writes `10.sql` (10 locations, 1000 expeditions, 10 members) to the current
//! directory:
//! ```
//! cargo run -p test-data --bin generate-sql
//! ```
//!
//! Every member count the benchmark reads, reproducibly:
//! ```
//! cargo run -p test-data --bin generate-sql -- --sweep --seed 12345 --out-dir research/scripts
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate-sql")]
#[command(version, about = "Generate SQL fixture scripts for the expedition index research")]
struct Cli {
    /// JSON file with a seed configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of locations
    #[arg(long)]
    locations: Option<usize>,

    /// Number of expeditions
    #[arg(long)]
    expeditions: Option<usize>,

    /// Number of members; also names the output file
    #[arg(long)]
    members: Option<usize>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the scripts are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Write one script for every member count of the research run
    #[arg(long, conflicts_with = "members")]
    sweep: bool,
}

impl Cli {
    fn seed_config(&self) -> anyhow::Result<SeedConfig> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SeedConfig::default(),
        };

        if let Some(locations) = self.locations {
            config.locations = locations;
        }
        if let Some(expeditions) = self.expeditions {
            config.expeditions = expeditions;
        }
        if let Some(members) = self.members {
            config.members = members;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.seed_config()?;

    if cli.sweep {
        let scripts = Seeder::write_sweep(&config, &cli.out_dir, &research_member_counts())
            .context("writing research sweep")?;
        tracing::info!("Sweep completed: {} scripts", scripts.len());
    } else {
        let script = Seeder::new(config)?
            .write_to_dir(&cli.out_dir)
            .context("writing fixture script")?;
        tracing::info!("Seed script ready at {}", script.path.display());
    }

    Ok(())
}
