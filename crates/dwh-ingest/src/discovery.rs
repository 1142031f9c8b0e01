//! Raw file discovery and entity matching.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Files belonging to one logical entity: stem ends with `_{entity}`
/// (case-insensitive), so `sql_orders.csv` and `access_orders.csv` both match
/// `orders` while `sql_order_details.csv` does not.
pub fn find_entity_files(csv_files: &[PathBuf], entity: &str) -> Vec<PathBuf> {
    let suffix = format!("_{}", entity.to_lowercase());
    csv_files
        .iter()
        .filter(|path| {
            path.file_stem()
                .and_then(|v| v.to_str())
                .map(|stem| stem.to_lowercase().ends_with(&suffix))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_raw_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &[
            "sql_orders.csv",
            "access_orders.csv",
            "sql_order_details.csv",
            "access_customers.csv",
            "notes.txt",
        ] {
            std::fs::write(dir.path().join(name), "header\nvalue\n").unwrap();
        }
        dir
    }

    #[test]
    fn lists_only_csv_sorted_by_name() {
        let dir = create_raw_dir();
        let files = list_csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files[0].file_name().unwrap().to_str().unwrap().starts_with("access_customers"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = list_csv_files(Path::new("/nonexistent/raw")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }

    #[test]
    fn entity_suffix_matches_exactly() {
        let dir = create_raw_dir();
        let files = list_csv_files(dir.path()).unwrap();

        let orders = find_entity_files(&files, "orders");
        assert_eq!(orders.len(), 2);

        // order_details must not be swallowed by the shorter "orders" suffix,
        // and vice versa.
        let details = find_entity_files(&files, "order_details");
        assert_eq!(details.len(), 1);

        assert!(find_entity_files(&files, "region").is_empty());
    }
}
