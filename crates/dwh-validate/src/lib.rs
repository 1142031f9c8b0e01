//! Post-load warehouse validation.
//!
//! An advisory integrity sweep over the persisted warehouse artifacts:
//! per-table existence, primary-key nullity and uniqueness, and a null-density
//! report. Failures are reported, never repaired; the sweep does not touch
//! the warehouse.

pub mod error;
pub mod report;
pub mod validator;

pub use error::{Result, ValidateError};
pub use report::{TableCheck, ValidationReport};
pub use validator::validate_warehouse;
