//! # ember-sql-core
//!
//! Dialect-aware DML statement compilation.
//!
//! This crate provides:
//! - A closed set of dialect descriptors with explicit capability
//!   lookups (no silent per-vendor defaults)
//! - A REPLACE (upsert) compiler that emits `REPLACE INTO ...` for
//!   MySQL-compatible dialects and fails with a typed error everywhere
//!   else
//! - Runtime table schemas with per-dialect DDL generation
//! - Protection against SQL injection through parameterized statements
//!
//! ## Dialect-dispatched REPLACE
//!
//! `REPLACE INTO` deletes the conflicting row and inserts the new one.
//! Dialects that lack it get a typed failure instead of a semantically
//! different `INSERT` fallback:
//!
//! ```rust
//! use ember_sql_core::{ColumnDef, Dialect, H2Mode, Replace, TableSchema};
//!
//! let schema = TableSchema::new("H2_TESTING")
//!     .column(ColumnDef::integer("id").auto_increment().primary_key());
//!
//! let replace = Replace::new(&schema).set("id", 1);
//!
//! // H2 in MySQL compatibility mode supports REPLACE.
//! let stmt = replace.compile(Dialect::H2(H2Mode::MySql)).unwrap();
//! assert_eq!(stmt.sql(), "REPLACE INTO \"H2_TESTING\" (\"id\") VALUES (?)");
//!
//! // Native H2 does not.
//! assert!(replace.compile(Dialect::H2(H2Mode::Native)).is_err());
//! ```
//!
//! Compilation is pure and stateless: the dialect descriptor is an
//! explicit parameter, never ambient session state, so the compiler is
//! safe to call concurrently and trivial to test without a connection.

pub mod dialect;
pub mod error;
pub mod replace;
pub mod schema;
pub mod select;
pub mod value;

pub use dialect::{Dialect, H2Mode};
pub use error::CompileError;
pub use replace::{compile_replace, Assignment, Replace, Statement};
pub use schema::{ColumnDef, SqlType, TableSchema};
pub use select::compile_select_eq;
pub use value::{SqlValue, ToSqlValue};
