//! Pipeline configuration.
//!
//! A plain value constructed at the entry point and passed down explicitly;
//! no process-wide state. The three directories mirror the pipeline stages:
//! raw extracts in, staged intermediates, conformed warehouse out.

use std::path::{Path, PathBuf};

/// Directory layout for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PipelineConfig {
    /// Directory holding the raw `<source>_<entity>.csv` extracts.
    pub raw_dir: PathBuf,
    /// Directory for staged (cleaned) intermediates.
    pub staging_dir: PathBuf,
    /// Directory for the conformed warehouse tables and `schema.sql`.
    pub warehouse_dir: PathBuf,
}

impl PipelineConfig {
    /// Standard layout under a single data directory:
    /// `raw/`, `staging/`, `warehouse/`.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            raw_dir: data_dir.join("raw"),
            staging_dir: data_dir.join("staging"),
            warehouse_dir: data_dir.join("warehouse"),
        }
    }

    /// Path of the generated DDL artifact.
    pub fn schema_path(&self) -> PathBuf {
        self.warehouse_dir.join("schema.sql")
    }
}
