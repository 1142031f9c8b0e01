//! Dimensional modeling engine.
//!
//! Consumes normalized entity tables from `dwh-ingest` and produces the
//! star-schema tables: surrogate-keyed dimensions (Date, Client, Employee,
//! Product) and the Sales fact with resolved foreign keys and derived
//! metrics. Builders are tolerant by design: empty inputs yield empty
//! outputs, unparseable dates are dropped (or replaced by the sentinel key in
//! the fact), and malformed numerics coerce to zero.

pub mod data_utils;
pub mod datetime;
pub mod dim_client;
pub mod dim_date;
pub mod dim_employee;
pub mod dim_product;
pub mod error;
pub mod fact_sales;
pub mod frame;

pub use data_utils::{clean_or_unknown, normalize_business_key, parse_f64_or_zero};
pub use datetime::{SENTINEL_DATE_KEY, date_key, parse_date_flexible};
pub use dim_client::{ClientDimRow, build_dim_client};
pub use dim_date::{DateDimRow, build_dim_date};
pub use dim_employee::{EmployeeDimRow, build_dim_employee};
pub use dim_product::{ProductDimRow, build_dim_product};
pub use error::{Result, TransformError};
pub use fact_sales::{FactSalesRow, build_fact_sales};
pub use frame::WarehouseFrames;
