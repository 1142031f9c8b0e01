//! The integrity sweep itself.

use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{error, info, warn};

use dwh_model::WAREHOUSE_TABLES;

use crate::error::{Result, ValidateError};
use crate::report::{TableCheck, ValidationReport};

/// Validates every expected warehouse table under `warehouse_dir`.
///
/// Headers are taken verbatim — the persisted artifacts already carry
/// canonical column names. Blank cells count as nulls.
pub fn validate_warehouse(warehouse_dir: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    for table in WAREHOUSE_TABLES {
        let check = check_table(warehouse_dir, table.name, table.primary_key)?;
        log_check(&check);
        report.checks.push(check);
    }
    Ok(report)
}

fn check_table(warehouse_dir: &Path, table: &str, primary_key: &str) -> Result<TableCheck> {
    let mut check = TableCheck {
        table: table.to_string(),
        primary_key: primary_key.to_string(),
        artifact_found: false,
        pk_present: false,
        rows: 0,
        columns: 0,
        null_pk: 0,
        dup_pk: 0,
        top_nulls: Vec::new(),
    };

    let path = warehouse_dir.join(format!("{table}.csv"));
    if !path.is_file() {
        return Ok(check);
    }
    check.artifact_found = true;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .map_err(|e| ValidateError::CsvRead {
            path: path.clone(),
            source: e,
        })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ValidateError::CsvRead {
            path: path.clone(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();
    check.columns = headers.len();

    let pk_idx = headers.iter().position(|h| h == primary_key);
    check.pk_present = pk_idx.is_some();

    let mut blank_counts = vec![0usize; headers.len()];
    let mut seen_pks = BTreeSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| ValidateError::CsvRead {
            path: path.clone(),
            source: e,
        })?;
        check.rows += 1;
        for (idx, count) in blank_counts.iter_mut().enumerate() {
            if record.get(idx).is_none_or(|v| v.trim().is_empty()) {
                *count += 1;
            }
        }
        if let Some(idx) = pk_idx {
            let value = record.get(idx).unwrap_or("").trim().to_string();
            if value.is_empty() {
                check.null_pk += 1;
            } else if !seen_pks.insert(value) {
                check.dup_pk += 1;
            }
        }
    }

    let mut nulls: Vec<(String, usize)> = headers
        .into_iter()
        .zip(blank_counts)
        .filter(|(_, count)| *count > 0)
        .collect();
    nulls.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    nulls.truncate(5);
    check.top_nulls = nulls;

    Ok(check)
}

fn log_check(check: &TableCheck) {
    if !check.artifact_found {
        error!(table = %check.table, "missing warehouse table artifact");
        return;
    }
    if !check.pk_present {
        error!(table = %check.table, pk = %check.primary_key, "primary-key column missing");
    } else if check.null_pk > 0 || check.dup_pk > 0 {
        error!(
            table = %check.table,
            null_pk = check.null_pk,
            dup_pk = check.dup_pk,
            "primary-key integrity violated"
        );
    } else {
        info!(table = %check.table, rows = check.rows, cols = check.columns, "pk ok");
    }
    for (column, count) in &check.top_nulls {
        warn!(table = %check.table, column = %column, nulls = count, "null-density");
    }
}
