//! Warehouse pipeline with explicit stages.
//!
//! 1. **Ingest**: load and normalize every raw entity (union + dedupe)
//! 2. **Transform**: build dimensions, then assemble the fact
//! 3. **Stage**: write cleaned CSVs
//! 4. **Load**: full-refresh copy into the warehouse, plus `schema.sql`
//! 5. **Validate**: advisory integrity sweep over the persisted outputs
//!
//! Each stage takes the previous stage's output as plain values; a stage
//! failure propagates and aborts the rest of the run.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dwh_ingest::{RawTable, load_entity};
use dwh_model::PipelineConfig;
use dwh_model::entity::{
    CUSTOMERS, EMPLOYEE_TERRITORIES, EMPLOYEES, ORDER_DETAILS, ORDERS, PRODUCTS, REGION,
    TERRITORIES,
};
use dwh_output::{load_warehouse, write_schema_sql, write_staging};
use dwh_transform::{
    WarehouseFrames, build_dim_client, build_dim_date, build_dim_employee, build_dim_product,
    build_fact_sales,
};
use dwh_validate::{ValidationReport, validate_warehouse};

/// Result of one full pipeline run.
#[derive(Debug)]
pub struct RunResult {
    /// (table name, row count) for every built table.
    pub row_counts: Vec<(String, usize)>,
    /// Tables actually loaded into the warehouse.
    pub loaded: usize,
    /// Validation outcome; `None` when the sweep was skipped.
    pub validation: Option<ValidationReport>,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        self.validation.as_ref().is_none_or(ValidationReport::passed)
    }
}

/// Normalized entity tables consumed by the transform stage.
struct IngestResult {
    orders: RawTable,
    order_details: RawTable,
    customers: RawTable,
    employees: RawTable,
    employee_territories: RawTable,
    territories: RawTable,
    region: RawTable,
    products: RawTable,
}

fn ingest(config: &PipelineConfig) -> Result<IngestResult> {
    let _span = info_span!("ingest").entered();
    let raw = config.raw_dir.as_path();
    Ok(IngestResult {
        orders: load_entity(raw, &ORDERS).context("load orders")?,
        order_details: load_entity(raw, &ORDER_DETAILS).context("load order details")?,
        customers: load_entity(raw, &CUSTOMERS).context("load customers")?,
        employees: load_entity(raw, &EMPLOYEES).context("load employees")?,
        employee_territories: load_entity(raw, &EMPLOYEE_TERRITORIES)
            .context("load employee territories")?,
        territories: load_entity(raw, &TERRITORIES).context("load territories")?,
        region: load_entity(raw, &REGION).context("load region")?,
        products: load_entity(raw, &PRODUCTS).context("load products")?,
    })
}

fn transform(entities: &IngestResult) -> Result<WarehouseFrames> {
    let _span = info_span!("transform").entered();
    let dim_date = build_dim_date(&entities.orders);
    let dim_client = build_dim_client(&entities.customers);
    let dim_employee = build_dim_employee(
        &entities.employees,
        &entities.employee_territories,
        &entities.territories,
        &entities.region,
    );
    let dim_product = build_dim_product(&entities.products);
    let fact_sales = build_fact_sales(
        &entities.order_details,
        &entities.orders,
        &dim_client,
        &dim_employee,
    );

    WarehouseFrames::build(&dim_date, &dim_client, &dim_employee, &dim_product, &fact_sales)
        .context("build warehouse frames")
}

/// Runs the full rebuild. Every run recomputes everything from the raw
/// inputs and overwrites all downstream artifacts.
pub fn run_pipeline(config: &PipelineConfig, validate: bool) -> Result<RunResult> {
    let entities = ingest(config)?;
    let frames = transform(&entities)?;

    let row_counts: Vec<(String, usize)> = frames
        .tables()
        .iter()
        .map(|(table, df)| (table.name.to_string(), df.height()))
        .collect();
    for (name, rows) in &row_counts {
        info!(table = %name, rows, "built");
    }

    {
        let _span = info_span!("load").entered();
        write_staging(config, &frames)?;
        write_schema_sql(config, &frames)?;
    }
    let loaded = load_warehouse(config)?.len();

    let validation = if validate {
        let _span = info_span!("validate").entered();
        Some(validate_warehouse(&config.warehouse_dir).context("validate warehouse")?)
    } else {
        None
    };

    Ok(RunResult {
        row_counts,
        loaded,
        validation,
    })
}
