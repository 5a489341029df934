//! Errors raised while loading results and writing charts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Malformed result on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Chart rendering error: {0}")]
    Render(String),

    #[error("PDF conversion error: {0}")]
    Pdf(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PlotError {
    /// Attaches a path to a bare IO error.
    pub(crate) fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            PlotError::Read(source) => PlotError::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
