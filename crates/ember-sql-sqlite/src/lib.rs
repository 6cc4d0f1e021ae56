//! # ember-sql-sqlite
//!
//! SQLite execution sink for `ember-sql-core` compiled statements.
//!
//! SQLite supports MySQL's `REPLACE INTO` natively (as an alias for
//! `INSERT OR REPLACE`), which makes it the embedded engine used here
//! to exercise replace semantics end to end.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ember_sql_core::{ColumnDef, Dialect, Replace, TableSchema};
//! use sqlx::SqlitePool;
//!
//! # async fn demo(pool: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! let schema = TableSchema::new("users")
//!     .column(ColumnDef::integer("id").primary_key())
//!     .column(ColumnDef::text("name"));
//!
//! ember_sql_sqlite::create_table(pool, &schema).await?;
//!
//! let stmt = Replace::new(&schema)
//!     .set("id", 1)
//!     .set("name", "alice")
//!     .compile(Dialect::Sqlite)?;
//! ember_sql_sqlite::execute(pool, &stmt).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;

pub use error::{ExecuteError, Result};
pub use executor::{create_table, execute, fetch_all};
