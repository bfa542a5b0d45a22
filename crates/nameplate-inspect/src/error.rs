use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Usage: nameplate-inspect <record.json>")]
    MissingRecordPath,

    #[error("Invalid NAMEPLATE_NOW value: {0}")]
    InvalidNow(String),
}

pub type Result<T> = std::result::Result<T, InspectError>;
