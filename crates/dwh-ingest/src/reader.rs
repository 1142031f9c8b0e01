//! CSV reading into a normalized [`RawTable`].

use std::path::Path;

use csv::ReaderBuilder;

use dwh_model::EntityDef;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, normalize_column_name};

/// Reads one raw CSV file, normalizing its headers and applying the entity's
/// column aliases. Cells are trimmed; short records are padded with empty
/// strings so every row matches the header width.
pub fn read_raw_table(path: &Path, entity: &EntityDef) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| apply_alias(normalize_column_name(h), entity))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(value.trim().trim_matches('\u{feff}').to_string());
        }
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

fn apply_alias(normalized: String, entity: &EntityDef) -> String {
    entity
        .aliases
        .iter()
        .find(|(from, _)| *from == normalized)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(normalized)
}
