use std::path::PathBuf;

use thiserror::Error;

/// Why a single source row could not become a [`Reading`](crate::data::model::Reading).
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("row is not a reading object: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("unreadable CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has invalid value '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// Configuration file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
