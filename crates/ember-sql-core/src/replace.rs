//! REPLACE (upsert) statement compilation.
//!
//! `REPLACE INTO` is the MySQL-family upsert: on a primary/unique key
//! conflict the existing row is deleted and the new one inserted. Not
//! every dialect has it, so compilation is dispatched through the
//! [`Dialect`] capability table. Dialects without native support fail
//! fast with a typed error; falling back to plain `INSERT` would
//! silently change conflict semantics and is never done.
//!
//! Compilation is pure: no I/O, no shared state, the dialect is an
//! explicit parameter.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{CompileError, Result};
use crate::schema::TableSchema;
use crate::value::{SqlValue, ToSqlValue};

/// A compiled, ready-to-bind SQL statement.
///
/// A statement is tied to the dialect it was compiled for; execution
/// sinks reject statements compiled for a different dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
    dialect: Dialect,
}

impl Statement {
    pub(crate) const fn new(sql: String, params: Vec<SqlValue>, dialect: Dialect) -> Self {
        Self {
            sql,
            params,
            dialect,
        }
    }

    /// Returns the SQL text with positional placeholders.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the parameters in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Returns the dialect this statement was compiled for.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }
}

/// Column assignments for a single row.
///
/// First-assignment order is preserved; assigning the same column again
/// overwrites the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    entries: Vec<(String, SqlValue)>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assigns a value to a column.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        let column = column.into();
        let value = value.to_sql_value();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == column) {
            entry.1 = value;
        } else {
            self.entries.push((column, value));
        }
        self
    }

    /// Returns whether no columns are assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the assigned `(column, value)` pairs in order.
    #[must_use]
    pub fn entries(&self) -> &[(String, SqlValue)] {
        &self.entries
    }
}

/// Compiles an insert-or-replace of one row into a [`Statement`].
///
/// Input errors (undeclared column, missing primary key, empty
/// assignment) are reported first so they surface identically on every
/// dialect; the capability check then rejects dialects without native
/// REPLACE. No SQL is produced and nothing touches a database on any
/// error path.
///
/// # Errors
///
/// Returns [`CompileError::UnsupportedOperation`] when the dialect has
/// no native REPLACE, and an input-validation variant when the schema
/// or assignment is malformed.
pub fn compile_replace(
    schema: &TableSchema,
    assignment: &Assignment,
    dialect: Dialect,
) -> Result<Statement> {
    if schema.primary_key().is_empty() {
        return Err(CompileError::MissingPrimaryKey {
            table: String::from(schema.name()),
        });
    }
    if assignment.is_empty() {
        return Err(CompileError::EmptyAssignment {
            table: String::from(schema.name()),
        });
    }
    for (column, _) in assignment.entries() {
        if !schema.has_column(column) {
            return Err(CompileError::UnknownColumn {
                table: String::from(schema.name()),
                column: column.clone(),
            });
        }
    }
    if !dialect.supports_replace() {
        return Err(CompileError::UnsupportedOperation {
            dialect: dialect.name(),
        });
    }

    let columns: Vec<String> = assignment
        .entries()
        .iter()
        .map(|(c, _)| dialect.quote_identifier(c))
        .collect();
    let placeholders: Vec<&str> = assignment.entries().iter().map(|_| "?").collect();
    let params: Vec<SqlValue> = assignment
        .entries()
        .iter()
        .map(|(_, v)| v.clone())
        .collect();

    let sql = format!(
        "REPLACE INTO {} ({}) VALUES ({})",
        dialect.quote_identifier(schema.name()),
        columns.join(", "),
        placeholders.join(", ")
    );

    debug!(
        table = schema.name(),
        dialect = dialect.name(),
        "compiled REPLACE statement"
    );

    Ok(Statement::new(sql, params, dialect))
}

/// A fluent REPLACE builder over a table schema.
///
/// `compile` borrows the builder, so the same inputs can be compiled
/// repeatedly for different dialects.
#[derive(Debug, Clone)]
pub struct Replace<'a> {
    schema: &'a TableSchema,
    assignment: Assignment,
}

impl<'a> Replace<'a> {
    /// Creates a REPLACE builder for the given schema.
    #[must_use]
    pub const fn new(schema: &'a TableSchema) -> Self {
        Self {
            schema,
            assignment: Assignment::new(),
        }
    }

    /// Assigns a value to a column.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.assignment = self.assignment.set(column, value);
        self
    }

    /// Compiles the replace for the given dialect.
    ///
    /// # Errors
    ///
    /// See [`compile_replace`].
    pub fn compile(&self, dialect: Dialect) -> Result<Statement> {
        compile_replace(self.schema, &self.assignment, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::H2Mode;
    use crate::schema::ColumnDef;

    const ALL_DIALECTS: [Dialect; 6] = [
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Sqlite,
        Dialect::Postgres,
        Dialect::H2(H2Mode::Native),
        Dialect::H2(H2Mode::MySql),
    ];

    fn testing_schema() -> TableSchema {
        TableSchema::new("H2_TESTING")
            .column(ColumnDef::integer("id").auto_increment().primary_key())
    }

    #[test]
    fn test_replace_in_h2_with_mysql_mode() {
        let schema = testing_schema();
        let stmt = Replace::new(&schema)
            .set("id", 1)
            .compile(Dialect::H2(H2Mode::MySql))
            .unwrap();

        assert_eq!(stmt.sql(), "REPLACE INTO \"H2_TESTING\" (\"id\") VALUES (?)");
        assert_eq!(stmt.params(), &[SqlValue::Int(1)]);
        assert_eq!(stmt.dialect(), Dialect::H2(H2Mode::MySql));
    }

    #[test]
    fn test_replace_in_h2_without_mysql_mode() {
        let schema = testing_schema();
        let err = Replace::new(&schema)
            .set("id", 1)
            .compile(Dialect::H2(H2Mode::Native))
            .unwrap_err();

        assert_eq!(err, CompileError::UnsupportedOperation { dialect: "h2" });
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_capability_table_decides_compilation() {
        let schema = testing_schema();
        let replace = Replace::new(&schema).set("id", 1);

        for dialect in ALL_DIALECTS {
            let result = replace.compile(dialect);
            assert_eq!(
                result.is_ok(),
                dialect.supports_replace(),
                "dialect {}",
                dialect.name()
            );
        }
    }

    #[test]
    fn test_mysql_quoting() {
        let schema = TableSchema::new("users")
            .column(ColumnDef::integer("id").primary_key())
            .column(ColumnDef::text("name"));
        let stmt = Replace::new(&schema)
            .set("id", 3)
            .set("name", "alice")
            .compile(Dialect::MySql)
            .unwrap();

        assert_eq!(
            stmt.sql(),
            "REPLACE INTO `users` (`id`, `name`) VALUES (?, ?)"
        );
    }

    #[test]
    fn test_idempotent_compilation() {
        let schema = testing_schema();
        let replace = Replace::new(&schema).set("id", 1);

        let first = replace.compile(Dialect::Sqlite).unwrap();
        let second = replace.compile(Dialect::Sqlite).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_column_fails_on_every_dialect() {
        let schema = testing_schema();
        let replace = Replace::new(&schema).set("missing", 1);

        for dialect in ALL_DIALECTS {
            let err = replace.compile(dialect).unwrap_err();
            assert_eq!(
                err,
                CompileError::UnknownColumn {
                    table: String::from("H2_TESTING"),
                    column: String::from("missing"),
                },
                "dialect {}",
                dialect.name()
            );
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_missing_primary_key_rejected() {
        let schema = TableSchema::new("log").column(ColumnDef::text("line"));
        let err = Replace::new(&schema)
            .set("line", "x")
            .compile(Dialect::MySql)
            .unwrap_err();

        assert_eq!(
            err,
            CompileError::MissingPrimaryKey {
                table: String::from("log"),
            }
        );
    }

    #[test]
    fn test_empty_assignment_rejected() {
        let schema = testing_schema();
        let err = Replace::new(&schema).compile(Dialect::MySql).unwrap_err();

        assert_eq!(
            err,
            CompileError::EmptyAssignment {
                table: String::from("H2_TESTING"),
            }
        );
    }

    #[test]
    fn test_reassigning_a_column_overwrites_in_place() {
        let schema = TableSchema::new("users")
            .column(ColumnDef::integer("id").primary_key())
            .column(ColumnDef::text("name"));
        let stmt = Replace::new(&schema)
            .set("id", 1)
            .set("name", "alice")
            .set("id", 2)
            .compile(Dialect::Sqlite)
            .unwrap();

        assert_eq!(
            stmt.sql(),
            "REPLACE INTO \"users\" (\"id\", \"name\") VALUES (?, ?)"
        );
        assert_eq!(stmt.params(), &[SqlValue::Int(2), SqlValue::Text(String::from("alice"))]);
    }
}
