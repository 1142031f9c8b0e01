//! Type inference and statement assembly.

use polars::prelude::{DataFrame, DataType};

use dwh_model::WarehouseTable;

/// Declarative SQL type for a runtime column dtype: integral columns become
/// INT, floating columns DECIMAL(10,2), temporal columns DATE, everything
/// else VARCHAR(255).
pub fn sql_type(dtype: &DataType) -> &'static str {
    if dtype.is_integer() {
        "INT"
    } else if dtype.is_float() {
        "DECIMAL(10,2)"
    } else if dtype.is_temporal() {
        "DATE"
    } else {
        "VARCHAR(255)"
    }
}

/// One `CREATE TABLE` statement for a built frame, columns in frame order.
/// The column matching the table's registered primary key is qualified.
pub fn create_table_sql(table: &WarehouseTable, df: &DataFrame) -> String {
    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .map(|column| {
            let mut line = format!("    {} {}", column.name(), sql_type(column.dtype()));
            if column.name().as_str() == table.primary_key {
                line.push_str(" PRIMARY KEY");
            }
            line
        })
        .collect();
    format!("CREATE TABLE {} (\n{}\n);\n", table.name, columns.join(",\n"))
}

/// The full schema artifact: one statement per (table, frame) pair.
pub fn generate_schema_sql<'a>(
    tables: impl IntoIterator<Item = (&'a WarehouseTable, &'a DataFrame)>,
) -> String {
    tables
        .into_iter()
        .map(|(table, df)| create_table_sql(table, df))
        .collect::<Vec<_>>()
        .join("\n")
}
