use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the scoring itself. Scoring never fails; reading input
/// records and loading config can.
#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid player record: {source}")]
    InvalidRecord {
        line:   usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("config {path:?}: {message}")]
    Config {
        path:    PathBuf,
        message: String,
    },

    #[error("could not serialize prediction: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorerError>;
