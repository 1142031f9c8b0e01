//! Library surface of the warehouse CLI: logging setup, pipeline
//! orchestration, and the run summary, reusable from integration tests.

pub mod logging;
pub mod pipeline;
pub mod summary;

pub use pipeline::{RunResult, run_pipeline};
