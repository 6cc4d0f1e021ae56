//! Executes compiled statements against a SQLite pool.
//!
//! A [`Statement`] carries the dialect it was compiled for; this sink
//! only accepts statements compiled for [`Dialect::Sqlite`]. Parameters
//! are bound positionally, never interpolated.

use ember_sql_core::{Dialect, SqlValue, Statement, TableSchema};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use tracing::debug;

use crate::error::{ExecuteError, Result};

fn check_dialect(statement: &Statement) -> Result<()> {
    if statement.dialect() == Dialect::Sqlite {
        Ok(())
    } else {
        Err(ExecuteError::DialectMismatch {
            expected: Dialect::Sqlite.name(),
            actual: statement.dialect().name(),
        })
    }
}

fn bind_param<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}

/// Executes a compiled statement, returning the rows-affected count.
///
/// # Errors
///
/// Returns [`ExecuteError::DialectMismatch`] for a statement compiled
/// for another dialect, or [`ExecuteError::Database`] when the
/// database rejects the statement.
pub async fn execute(pool: &SqlitePool, statement: &Statement) -> Result<u64> {
    check_dialect(statement)?;

    let mut query = sqlx::query(statement.sql());
    for param in statement.params() {
        query = bind_param(query, param.clone());
    }

    let result = query.execute(pool).await?;
    debug!(
        sql = statement.sql(),
        rows = result.rows_affected(),
        "executed statement"
    );
    Ok(result.rows_affected())
}

/// Runs a compiled lookup and returns all matching rows.
///
/// # Errors
///
/// Same failure modes as [`execute`].
pub async fn fetch_all(pool: &SqlitePool, statement: &Statement) -> Result<Vec<SqliteRow>> {
    check_dialect(statement)?;

    let mut query = sqlx::query(statement.sql());
    for param in statement.params() {
        query = bind_param(query, param.clone());
    }

    let rows = query.fetch_all(pool).await?;
    debug!(sql = statement.sql(), rows = rows.len(), "fetched rows");
    Ok(rows)
}

/// Creates the table described by `schema` if it does not exist.
///
/// # Errors
///
/// Returns [`ExecuteError::Database`] when the DDL fails.
pub async fn create_table(pool: &SqlitePool, schema: &TableSchema) -> Result<()> {
    let sql = schema.create_sql(Dialect::Sqlite);
    sqlx::query(&sql).execute(pool).await?;
    debug!(table = schema.name(), "created table");
    Ok(())
}
