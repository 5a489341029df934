//! Result plotting for the expedition index research.
//!
//! Reads the benchmark's results file, converts accumulated lookup times to average
//! milliseconds and renders the indexed and non-indexed series on one chart.
//!
//! ```rust,no_run
//! use research_plot::prelude::*;
//!
//! let config = PlotConfig::default();
//! let results = load_results(&config.input)?;
//! write_chart(&config.output, &results.scaled(config.runs), &config.style)?;
//! # Ok::<(), research_plot::error::PlotError>(())
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod results;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::chart::{OutputFormat, render_svg, svg_to_pdf, write_chart};
    pub use crate::config::{ChartStyle, DEFAULT_RUNS, PlotConfig};
    pub use crate::error::PlotError;
    pub use crate::results::{
        ResultRow, ResultSeries, ScaledSeries, load_results, parse_line, read_results,
    };
}
