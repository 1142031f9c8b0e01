//! In-memory raw table and column-name normalization.

/// A raw tabular extract: normalized headers plus string cells.
///
/// Every row has exactly `headers.len()` cells; short source records are
/// padded with empty strings on read.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// An empty table, the degraded result for a missing source.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a normalized column name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at (row, column name); empty string when the column is
    /// missing or the cell is blank.
    pub fn value(&self, row: usize, name: &str) -> &str {
        self.column_index(name)
            .and_then(|idx| self.rows.get(row).and_then(|r| r.get(idx)))
            .map_or("", String::as_str)
    }

    /// True when every listed column exists in this table.
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.column_index(n).is_some())
    }

    /// Appends all rows of `other`, aligning its columns to this table's
    /// headers by name. Columns present only in `other` are added to the
    /// header set, with earlier rows padded.
    pub fn union(&mut self, other: RawTable) {
        if self.headers.is_empty() {
            *self = other;
            return;
        }
        for header in &other.headers {
            if self.column_index(header).is_none() {
                self.headers.push(header.clone());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }
        for row in &other.rows {
            let mut aligned = vec![String::new(); self.headers.len()];
            for (idx, header) in other.headers.iter().enumerate() {
                if let Some(target) = self.column_index(header) {
                    aligned[target] = row.get(idx).cloned().unwrap_or_default();
                }
            }
            self.rows.push(aligned);
        }
    }

    /// Drops rows whose business-key tuple was already seen, keeping the
    /// first occurrence in row order. No-op when a key column is missing.
    pub fn dedupe_by(&mut self, key_columns: &[&str]) {
        let indices: Vec<usize> = key_columns
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        if indices.len() != key_columns.len() {
            return;
        }
        let mut seen = std::collections::BTreeSet::new();
        self.rows.retain(|row| {
            let key: Vec<&str> = indices
                .iter()
                .map(|&idx| row.get(idx).map_or("", String::as_str))
                .collect();
            seen.insert(key.join("\u{1f}"))
        });
    }
}

/// Canonicalizes a raw column name: lowercase, trimmed, internal spaces and
/// underscores removed. The two source systems name identical concepts
/// differently ("Order Date" vs "OrderDate" vs "order_date"); column identity
/// is only comparable after this normalization.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .chars()
        .filter(|ch| *ch != ' ' && *ch != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_divergent_spellings_to_one_name() {
        assert_eq!(normalize_column_name("Order Date"), "orderdate");
        assert_eq!(normalize_column_name("OrderDate"), "orderdate");
        assert_eq!(normalize_column_name(" order_date "), "orderdate");
        assert_eq!(normalize_column_name("\u{feff}OrderID"), "orderid");
    }

    #[test]
    fn union_aligns_columns_by_name() {
        let mut a = RawTable {
            headers: vec!["orderid".into(), "orderdate".into()],
            rows: vec![vec!["1".into(), "2024-01-01".into()]],
        };
        let b = RawTable {
            headers: vec!["orderdate".into(), "orderid".into(), "freight".into()],
            rows: vec![vec!["2024-02-01".into(), "2".into(), "3.5".into()]],
        };
        a.union(b);
        assert_eq!(a.headers, vec!["orderid", "orderdate", "freight"]);
        assert_eq!(a.rows[0], vec!["1", "2024-01-01", ""]);
        assert_eq!(a.rows[1], vec!["2", "2024-02-01", "3.5"]);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut table = RawTable {
            headers: vec!["orderid".into(), "source".into()],
            rows: vec![
                vec!["1".into(), "sql".into()],
                vec!["2".into(), "sql".into()],
                vec!["1".into(), "access".into()],
            ],
        };
        table.dedupe_by(&["orderid"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "sql");
    }

    #[test]
    fn dedupe_is_noop_without_key_column() {
        let mut table = RawTable {
            headers: vec!["name".into()],
            rows: vec![vec!["a".into()], vec!["a".into()]],
        };
        table.dedupe_by(&["orderid"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn composite_key_dedupe() {
        let mut table = RawTable {
            headers: vec!["orderid".into(), "productid".into()],
            rows: vec![
                vec!["1".into(), "10".into()],
                vec!["1".into(), "11".into()],
                vec!["1".into(), "10".into()],
            ],
        };
        table.dedupe_by(&["orderid", "productid"]);
        assert_eq!(table.rows.len(), 2);
    }
}
