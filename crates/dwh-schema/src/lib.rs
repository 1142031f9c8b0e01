//! Schema/DDL generation.
//!
//! The warehouse is self-describing: each built frame's runtime dtypes are
//! mapped to declarative SQL column types and emitted as one `CREATE TABLE`
//! statement per table, concatenated into a single `schema.sql` artifact.

pub mod ddl;

pub use ddl::{create_table_sql, generate_schema_sql, sql_type};
