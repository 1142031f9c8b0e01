use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to read warehouse table {path}: {source}")]
    CsvRead {
        path: PathBuf,
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
