//! Entity loading: discovery + union + deduplication.

use std::path::Path;

use tracing::{debug, warn};

use dwh_model::EntityDef;

use crate::discovery::{find_entity_files, list_csv_files};
use crate::error::Result;
use crate::reader::read_raw_table;
use crate::table::RawTable;

/// Loads every raw file for one logical entity, unions the per-source tables
/// and deduplicates by the entity's business key (first occurrence wins;
/// union order follows the sorted file listing).
///
/// No matching file yields an empty table with a warning, never an error:
/// downstream builders produce empty output for empty input.
pub fn load_entity(raw_dir: &Path, entity: &EntityDef) -> Result<RawTable> {
    let csv_files = list_csv_files(raw_dir)?;
    let files = find_entity_files(&csv_files, entity.name);
    if files.is_empty() {
        warn!(entity = entity.name, "no raw files found, using empty table");
        return Ok(RawTable::empty());
    }
    debug!(entity = entity.name, files = files.len(), "loading raw files");

    let mut merged = RawTable::empty();
    for path in &files {
        let table = read_raw_table(path, entity)?;
        merged.union(table);
    }

    merged.dedupe_by(entity.business_keys);
    debug!(
        entity = entity.name,
        rows = merged.rows.len(),
        columns = merged.headers.len(),
        "entity loaded"
    );
    Ok(merged)
}
