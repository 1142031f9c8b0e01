//! Validation report types.

/// Outcome of checking one expected warehouse table.
#[derive(Debug, Clone)]
pub struct TableCheck {
    /// Conformed table name.
    pub table: String,
    /// Expected primary-key column.
    pub primary_key: String,
    /// Whether the persisted artifact exists at all.
    pub artifact_found: bool,
    /// Whether the primary-key column exists in the artifact.
    pub pk_present: bool,
    pub rows: usize,
    pub columns: usize,
    /// Null (blank) primary-key values; must be zero to pass.
    pub null_pk: usize,
    /// Duplicate primary-key values beyond the first occurrence.
    pub dup_pk: usize,
    /// Top columns by blank count, descending; advisory only.
    pub top_nulls: Vec<(String, usize)>,
}

impl TableCheck {
    pub fn passed(&self) -> bool {
        self.artifact_found && self.pk_present && self.null_pk == 0 && self.dup_pk == 0
    }
}

/// Aggregate verdict over every expected table.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub checks: Vec<TableCheck>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(TableCheck::passed)
    }
}
