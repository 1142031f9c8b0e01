//! Staging and warehouse persistence.
//!
//! Built frames are first staged as cleaned CSVs, then loaded wholesale into
//! the warehouse directory under conformed table names together with the
//! generated `schema.sql`. Every run is a full refresh: prior outputs are
//! overwritten, never merged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, warn};

use dwh_model::{PipelineConfig, WAREHOUSE_TABLES, WarehouseTable};
use dwh_schema::generate_schema_sql;
use dwh_transform::WarehouseFrames;

/// Writes one frame as CSV, creating parent directories as needed.
pub fn write_frame_csv(path: &Path, df: &DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write csv {}", path.display()))?;
    Ok(())
}

/// Stages every built table as a cleaned CSV.
pub fn write_staging(config: &PipelineConfig, frames: &WarehouseFrames) -> Result<()> {
    for (table, df) in frames.tables() {
        let path = config.staging_dir.join(table.staging_file);
        write_frame_csv(&path, df)?;
        info!(table = table.name, rows = df.height(), "staged");
    }
    Ok(())
}

/// Loads staged files into the warehouse directory under conformed names.
///
/// A missing staging file is a warning, not an error: the warehouse is
/// best-effort and the validator is the authoritative signal of gaps.
/// Returns the tables actually loaded.
pub fn load_warehouse(config: &PipelineConfig) -> Result<Vec<&'static WarehouseTable>> {
    fs::create_dir_all(&config.warehouse_dir)
        .with_context(|| format!("create directory {}", config.warehouse_dir.display()))?;

    let mut loaded = Vec::new();
    for table in WAREHOUSE_TABLES {
        let staged = config.staging_dir.join(table.staging_file);
        if !staged.is_file() {
            warn!(table = table.name, file = table.staging_file, "missing staging file");
            continue;
        }
        let target = config.warehouse_dir.join(table.warehouse_file());
        fs::copy(&staged, &target)
            .with_context(|| format!("load {} -> {}", staged.display(), target.display()))?;
        info!(table = table.name, "loaded into warehouse");
        loaded.push(table);
    }
    Ok(loaded)
}

/// Writes the generated DDL for all built tables to `schema.sql`.
pub fn write_schema_sql(config: &PipelineConfig, frames: &WarehouseFrames) -> Result<()> {
    let schema = generate_schema_sql(frames.tables());
    let path = config.schema_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(&path, schema).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "schema written");
    Ok(())
}
