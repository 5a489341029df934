//! Configuration for result plotting.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Successful lookups accumulated into each timing value by the benchmark.
pub const DEFAULT_RUNS: NonZeroU32 = NonZeroU32::new(100).unwrap();

/// Labels and dimensions of the comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Legend entry of the indexed series.
    pub indexed_label: String,
    /// Legend entry of the series without indexes.
    pub no_index_label: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            x_label: "Количество участников в таблице".to_string(),
            y_label: "Время, мс".to_string(),
            indexed_label: "Есть индексы".to_string(),
            no_index_label: "Нет индексов".to_string(),
        }
    }
}

/// Where results are read from and the chart is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Results file written by the benchmark.
    pub input: PathBuf,
    /// Chart output. The extension picks the format: `.svg` or PDF otherwise.
    pub output: PathBuf,
    /// Divisor turning accumulated nanoseconds into a per-run average.
    pub runs: NonZeroU32,
    pub style: ChartStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("../../result.txt"),
            output: PathBuf::from("resultGraph.pdf"),
            runs: DEFAULT_RUNS,
            style: ChartStyle::default(),
        }
    }
}

impl PlotConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PlotError::from(e).at(path))?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.input, PathBuf::from("../../result.txt"));
        assert_eq!(config.output, PathBuf::from("resultGraph.pdf"));
        assert_eq!(config.runs.get(), 100);
        assert_eq!(config.style.y_label, "Время, мс");
    }

    #[test]
    fn test_zero_runs_rejected() {
        let result: Result<PlotConfig, _> = serde_json::from_str(r#"{"runs": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_style() {
        let config: PlotConfig =
            serde_json::from_str(r#"{"output": "chart.svg", "style": {"width": 1200}}"#).unwrap();
        assert_eq!(config.output, PathBuf::from("chart.svg"));
        assert_eq!(config.style.width, 1200);
        assert_eq!(config.style.height, 600);
        assert_eq!(config.style.indexed_label, "Есть индексы");
    }
}
