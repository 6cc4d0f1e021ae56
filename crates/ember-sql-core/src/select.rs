//! Point-lookup SELECT compilation.
//!
//! Deliberately not a query DSL: one equality predicate, all schema
//! columns, so a row written through [`compile_replace`] can be read
//! back through the same statement/parameter path.
//!
//! [`compile_replace`]: crate::replace::compile_replace

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{CompileError, Result};
use crate::replace::Statement;
use crate::schema::{ColumnDef, TableSchema};
use crate::value::ToSqlValue;

/// Compiles a `SELECT * FROM table WHERE column = ?` point lookup,
/// with the column list spelled out from the schema.
///
/// # Errors
///
/// Returns [`CompileError::UnknownColumn`] when the predicate column is
/// not declared in the schema.
pub fn compile_select_eq(
    schema: &TableSchema,
    column: &str,
    value: impl ToSqlValue,
    dialect: Dialect,
) -> Result<Statement> {
    if !schema.has_column(column) {
        return Err(CompileError::UnknownColumn {
            table: String::from(schema.name()),
            column: String::from(column),
        });
    }

    let columns: Vec<String> = schema
        .columns()
        .iter()
        .map(ColumnDef::name)
        .map(|c| dialect.quote_identifier(c))
        .collect();

    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        columns.join(", "),
        dialect.quote_identifier(schema.name()),
        dialect.quote_identifier(column)
    );

    debug!(
        table = schema.name(),
        dialect = dialect.name(),
        "compiled SELECT statement"
    );

    Ok(Statement::new(sql, vec![value.to_sql_value()], dialect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDef;
    use crate::value::SqlValue;

    #[test]
    fn test_select_by_primary_key() {
        let schema = TableSchema::new("H2_TESTING")
            .column(ColumnDef::integer("id").auto_increment().primary_key());
        let stmt = compile_select_eq(&schema, "id", 1, Dialect::Sqlite).unwrap();

        assert_eq!(
            stmt.sql(),
            "SELECT \"id\" FROM \"H2_TESTING\" WHERE \"id\" = ?"
        );
        assert_eq!(stmt.params(), &[SqlValue::Int(1)]);
    }

    #[test]
    fn test_select_unknown_column() {
        let schema = TableSchema::new("t").column(ColumnDef::integer("id").primary_key());
        let err = compile_select_eq(&schema, "nope", 1, Dialect::Sqlite).unwrap_err();

        assert_eq!(
            err,
            CompileError::UnknownColumn {
                table: String::from("t"),
                column: String::from("nope"),
            }
        );
    }

    #[test]
    fn test_select_lists_all_schema_columns() {
        let schema = TableSchema::new("users")
            .column(ColumnDef::integer("id").primary_key())
            .column(ColumnDef::text("name"));
        let stmt = compile_select_eq(&schema, "id", 7, Dialect::MySql).unwrap();

        assert_eq!(
            stmt.sql(),
            "SELECT `id`, `name` FROM `users` WHERE `id` = ?"
        );
    }
}
