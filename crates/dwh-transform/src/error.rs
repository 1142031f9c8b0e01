use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("frame construction failed: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
