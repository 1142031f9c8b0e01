//! Raw entity ingestion.
//!
//! Turns inconsistently-named operational extracts into normalized in-memory
//! tables: every raw file matching a logical entity is read with its column
//! names canonicalized, the per-source tables are unioned, and the result is
//! deduplicated by the entity's business key. A missing source degrades to an
//! empty table rather than an error; downstream builders treat empty input as
//! a valid empty-output case.

pub mod discovery;
pub mod error;
pub mod loader;
pub mod reader;
pub mod table;

pub use discovery::{find_entity_files, list_csv_files};
pub use error::{IngestError, Result};
pub use loader::load_entity;
pub use reader::read_raw_table;
pub use table::{RawTable, normalize_column_name};
