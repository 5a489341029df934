//! Benchmark results file parsing.
//!
//! Each line holds five whitespace-separated integers:
//! `size timeIndexed errorIndexed timeNoIndex errorNoIndex`. Times are nanoseconds accumulated
//! over every successful lookup of one measurement; error columns count failed lookups.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::NonZeroU32;
use std::path::Path;

use tracing::{debug, info};

use crate::error::PlotError;

const FIELDS: usize = 5;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// One measured table size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub size: i64,
    pub time_indexed: i64,
    pub error_indexed: i64,
    pub time_no_index: i64,
    pub error_no_index: i64,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.size,
            self.time_indexed,
            self.error_indexed,
            self.time_no_index,
            self.error_no_index
        )
    }
}

/// Parses one results line. `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<ResultRow, PlotError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELDS {
        return Err(PlotError::Parse {
            line: line_no,
            reason: format!("expected {FIELDS} integers, found {} tokens", tokens.len()),
        });
    }

    let mut values = [0i64; FIELDS];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token.parse().map_err(|e| PlotError::Parse {
            line: line_no,
            reason: format!("invalid integer {token:?}: {e}"),
        })?;
    }

    let [size, time_indexed, error_indexed, time_no_index, error_no_index] = values;
    Ok(ResultRow {
        size,
        time_indexed,
        error_indexed,
        time_no_index,
        error_no_index,
    })
}

/// Result columns as parallel, index-aligned sequences in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSeries {
    pub size: Vec<i64>,
    pub time_indexed: Vec<i64>,
    pub error_indexed: Vec<i64>,
    pub time_no_index: Vec<i64>,
    pub error_no_index: Vec<i64>,
}

impl ResultSeries {
    pub fn push(&mut self, row: ResultRow) {
        self.size.push(row.size);
        self.time_indexed.push(row.time_indexed);
        self.error_indexed.push(row.error_indexed);
        self.time_no_index.push(row.time_no_index);
        self.error_no_index.push(row.error_no_index);
    }

    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Returns row `i` reassembled from the columns.
    pub fn row(&self, i: usize) -> Option<ResultRow> {
        Some(ResultRow {
            size: *self.size.get(i)?,
            time_indexed: *self.time_indexed.get(i)?,
            error_indexed: *self.error_indexed.get(i)?,
            time_no_index: *self.time_no_index.get(i)?,
            error_no_index: *self.error_no_index.get(i)?,
        })
    }

    /// Converts both timing columns to average milliseconds per run.
    ///
    /// Every value is divided by `runs` regardless of the error columns.
    pub fn scaled(&self, runs: NonZeroU32) -> ScaledSeries {
        let to_ms = |raw: &i64| *raw as f64 / runs.get() as f64 / NANOS_PER_MILLI;

        ScaledSeries {
            size: self.size.clone(),
            indexed_ms: self.time_indexed.iter().map(to_ms).collect(),
            no_index_ms: self.time_no_index.iter().map(to_ms).collect(),
        }
    }
}

impl FromIterator<ResultRow> for ResultSeries {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        let mut series = Self::default();
        for row in iter {
            series.push(row);
        }
        series
    }
}

/// Timing series ready for plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaledSeries {
    pub size: Vec<i64>,
    pub indexed_ms: Vec<f64>,
    pub no_index_ms: Vec<f64>,
}

impl ScaledSeries {
    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// `(size, ms)` points of the indexed series.
    pub fn indexed_points(&self) -> Vec<(f64, f64)> {
        points(&self.size, &self.indexed_ms)
    }

    /// `(size, ms)` points of the series without indexes.
    pub fn no_index_points(&self) -> Vec<(f64, f64)> {
        points(&self.size, &self.no_index_ms)
    }
}

fn points(size: &[i64], ms: &[f64]) -> Vec<(f64, f64)> {
    size.iter().zip(ms).map(|(&x, &y)| (x as f64, y)).collect()
}

/// Reads results until EOF, failing on the first malformed line.
pub fn read_results(reader: impl BufRead) -> Result<ResultSeries, PlotError> {
    let mut series = ResultSeries::default();

    for (i, line) in reader.lines().enumerate() {
        let row = parse_line(&line?, i + 1)?;
        debug!("Parsed {row}");
        series.push(row);
    }

    Ok(series)
}

/// Opens and reads a results file.
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultSeries, PlotError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PlotError::from(e).at(path))?;
    let series = read_results(BufReader::new(file)).map_err(|e| e.at(path))?;

    info!("Loaded {} result rows from {}", series.len(), path.display());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RUNS;

    #[test]
    fn test_parse_line() {
        let row = parse_line("10 500000000 2 600000000 3", 1).unwrap();
        assert_eq!(
            row,
            ResultRow {
                size: 10,
                time_indexed: 500_000_000,
                error_indexed: 2,
                time_no_index: 600_000_000,
                error_no_index: 3,
            }
        );
        assert_eq!(row.to_string(), "10 500000000 2 600000000 3");
    }

    #[test]
    fn test_parse_line_tolerates_extra_whitespace() {
        let row = parse_line("  20\t1 0  2 0 \r", 1).unwrap();
        assert_eq!(row.size, 20);
        assert_eq!(row.time_no_index, 2);
    }

    #[test]
    fn test_parse_line_token_count() {
        for line in ["", "10 1 0 2", "10 1 0 2 0 7"] {
            let err = parse_line(line, 4).unwrap_err();
            assert!(matches!(err, PlotError::Parse { line: 4, .. }), "{line:?}");
        }
    }

    #[test]
    fn test_parse_line_rejects_non_integers() {
        let err = parse_line("10 5.5 0 2 0", 2).unwrap_err();
        assert!(err.to_string().contains("\"5.5\""));
        assert!(parse_line("10 abc 0 2 0", 2).is_err());
    }

    #[test]
    fn test_scaling() {
        let series: ResultSeries = [parse_line("10 500000000 2 600000000 3", 1).unwrap()]
            .into_iter()
            .collect();
        let scaled = series.scaled(DEFAULT_RUNS);

        assert_eq!(scaled.size, vec![10]);
        assert_eq!(scaled.indexed_ms, vec![5.0]);
        assert_eq!(scaled.no_index_ms, vec![6.0]);
        assert_eq!(scaled.indexed_points(), vec![(10.0, 5.0)]);
    }

    #[test]
    fn test_scaling_ignores_error_counts() {
        let series: ResultSeries = [parse_line("10 500000000 40 500000000 0", 1).unwrap()]
            .into_iter()
            .collect();
        let scaled = series.scaled(DEFAULT_RUNS);
        assert_eq!(scaled.indexed_ms, scaled.no_index_ms);
    }

    #[test]
    fn test_read_results_alignment() {
        let input = "10 100 0 200 1\n20 300 2 400 3\n30 500 4 600 5";
        let series = read_results(input.as_bytes()).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.size, vec![10, 20, 30]);
        assert_eq!(series.time_indexed, vec![100, 300, 500]);
        assert_eq!(series.error_indexed, vec![0, 2, 4]);
        assert_eq!(series.time_no_index, vec![200, 400, 600]);
        assert_eq!(series.error_no_index, vec![1, 3, 5]);
        assert_eq!(series.row(1).unwrap().to_string(), "20 300 2 400 3");
        assert!(series.row(3).is_none());
    }

    #[test]
    fn test_read_results_trailing_newline_optional() {
        let with = read_results("10 1 0 2 0\n".as_bytes()).unwrap();
        let without = read_results("10 1 0 2 0".as_bytes()).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_read_results_blank_line_is_fatal() {
        let err = read_results("10 1 0 2 0\n\n20 1 0 2 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_results("/nonexistent/result.txt").unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/result.txt"));
    }
}
