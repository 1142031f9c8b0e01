//! Warehouse data model definitions.
//!
//! Shared, dependency-free vocabulary for the pipeline: which logical source
//! entities exist and how their raw columns map to canonical names, which
//! warehouse tables are produced and what their primary keys are, and the
//! configuration value threaded through every stage.

pub mod config;
pub mod entity;
pub mod warehouse;

pub use config::PipelineConfig;
pub use entity::{ENTITIES, EntityDef, entity};
pub use warehouse::{WAREHOUSE_TABLES, WarehouseTable, warehouse_table};
