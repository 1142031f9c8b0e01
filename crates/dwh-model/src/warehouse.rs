//! Warehouse table registry.
//!
//! The conformed star-schema tables the pipeline produces, with their primary
//! keys and staging file names. The schema generator uses the primary key to
//! qualify DDL columns and the validator uses it for the integrity sweep.

/// One conformed warehouse table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WarehouseTable {
    /// Conformed table name (`DimDate`, `FactSales`, ...).
    pub name: &'static str,
    /// Surrogate primary-key column.
    pub primary_key: &'static str,
    /// File name of the staged intermediate written before the warehouse load.
    pub staging_file: &'static str,
}

impl WarehouseTable {
    /// File name of the persisted warehouse artifact.
    pub fn warehouse_file(&self) -> String {
        format!("{}.csv", self.name)
    }
}

pub const DIM_DATE: WarehouseTable = WarehouseTable {
    name: "DimDate",
    primary_key: "sk_date",
    staging_file: "cleaned_date.csv",
};

pub const DIM_CLIENT: WarehouseTable = WarehouseTable {
    name: "DimClient",
    primary_key: "sk_client",
    staging_file: "cleaned_clients.csv",
};

pub const DIM_EMPLOYEE: WarehouseTable = WarehouseTable {
    name: "DimEmployee",
    primary_key: "sk_employee",
    staging_file: "cleaned_employees.csv",
};

pub const DIM_PRODUCT: WarehouseTable = WarehouseTable {
    name: "DimProduct",
    primary_key: "sk_product",
    staging_file: "cleaned_products.csv",
};

pub const FACT_SALES: WarehouseTable = WarehouseTable {
    name: "FactSales",
    primary_key: "fact_id",
    staging_file: "cleaned_sales.csv",
};

/// Every warehouse table, dimensions first.
pub const WAREHOUSE_TABLES: &[WarehouseTable] =
    &[DIM_DATE, DIM_CLIENT, DIM_EMPLOYEE, DIM_PRODUCT, FACT_SALES];

/// Looks up a warehouse table by conformed name.
pub fn warehouse_table(name: &str) -> Option<&'static WarehouseTable> {
    WAREHOUSE_TABLES.iter().find(|t| t.name == name)
}
