//! Renders the research results chart.
//!
//! Run from `research/scripts` to read `../../result.txt` and write `resultGraph.pdf`:
//! ```
//! cargo run -p research-plot --bin plot-results
//! ```

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use research_plot::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plot-results")]
#[command(version, about = "Plot lookup time against table size, with and without indexes")]
struct Cli {
    /// JSON file with a plot configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Results file written by the benchmark
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Chart output; `.svg` writes SVG, anything else PDF
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Runs accumulated into each timing value
    #[arg(long)]
    runs: Option<NonZeroU32>,
}

impl Cli {
    fn plot_config(self) -> anyhow::Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PlotConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().plot_config()?;

    let results = load_results(&config.input)
        .with_context(|| format!("reading results from {}", config.input.display()))?;
    let scaled = results.scaled(config.runs);

    write_chart(&config.output, &scaled, &config.style)
        .with_context(|| format!("writing chart to {}", config.output.display()))?;

    Ok(())
}
