use std::path::PathBuf;

use collatz_rand::RngError;
use thiserror::Error;

/// Errors raised by the sampling harness
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid harness JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid harness config: {0}")]
    Config(String),

    #[error("generator error: {0}")]
    Rng(#[from] RngError),

    #[error("failed to initialise tracing: {0}")]
    Tracing(String),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
