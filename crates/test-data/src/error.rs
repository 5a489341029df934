//! Errors raised while configuring and writing fixture scripts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No rows generated for table {0}")]
    EmptyTable(&'static str),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
