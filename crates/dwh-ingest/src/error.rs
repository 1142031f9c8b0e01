use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("raw directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read csv {path}: {source}")]
    CsvRead {
        path: PathBuf,
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
