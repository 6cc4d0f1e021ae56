//! Runtime table schemas and DDL generation.
//!
//! A [`TableSchema`] is an ordered set of column definitions: name,
//! type, nullability, auto-increment flag, and primary-key membership.
//! Schemas are plain values built fluently; DDL generation maps types
//! and auto-increment keywords per dialect.

use crate::dialect::Dialect;

/// Column data types, mapped to dialect-specific SQL types when
/// generating DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Double-precision float.
    Real,
    /// Variable-length text.
    Text,
    /// Binary blob.
    Blob,
    /// Boolean.
    Boolean,
}

/// A single column definition.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    name: String,
    sql_type: SqlType,
    nullable: bool,
    auto_increment: bool,
    primary_key: bool,
}

impl ColumnDef {
    /// Creates a column definition. Columns are NOT NULL by default.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
            auto_increment: false,
            primary_key: false,
        }
    }

    /// Creates an integer column.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Integer)
    }

    /// Creates a big-integer column.
    #[must_use]
    pub fn big_integer(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::BigInt)
    }

    /// Creates a text column.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Text)
    }

    /// Creates a boolean column.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Boolean)
    }

    /// Marks the column as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Marks the column as part of the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column type.
    #[must_use]
    pub const fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    /// Returns whether the column is nullable.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns whether the column auto-increments.
    #[must_use]
    pub const fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// Returns whether the column is part of the primary key.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }
}

/// An ordered table schema.
#[derive(Debug, Clone)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Creates an empty schema for the named table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Appends a column definition.
    #[must_use]
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column definitions in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns whether a column with the given name is declared.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the primary-key column names in declaration order.
    #[must_use]
    pub fn primary_key(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(ColumnDef::name)
            .collect()
    }

    /// Generates `CREATE TABLE IF NOT EXISTS` DDL for the dialect.
    #[must_use]
    pub fn create_sql(&self, dialect: Dialect) -> String {
        let single_pk = self.primary_key().len() == 1;
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| column_sql(c, dialect, single_pk))
            .collect();

        if !single_pk {
            let pk = self.primary_key();
            if !pk.is_empty() {
                let quoted: Vec<String> =
                    pk.iter().map(|c| dialect.quote_identifier(c)).collect();
                parts.push(format!("PRIMARY KEY ({})", quoted.join(", ")));
            }
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            dialect.quote_identifier(&self.name),
            parts.join(", ")
        )
    }
}

fn column_sql(column: &ColumnDef, dialect: Dialect, single_pk: bool) -> String {
    let mut sql = dialect.quote_identifier(&column.name);
    sql.push(' ');

    if column.auto_increment && dialect == Dialect::Postgres {
        // PostgreSQL encodes auto-increment in the type itself.
        sql.push_str(match column.sql_type {
            SqlType::BigInt => "BIGSERIAL",
            _ => "SERIAL",
        });
    } else {
        sql.push_str(map_type(dialect, column.sql_type));
    }

    if !column.nullable && !column.primary_key {
        sql.push_str(" NOT NULL");
    }

    let inline_pk = single_pk && column.primary_key;
    match dialect {
        // SQLite requires PRIMARY KEY before AUTOINCREMENT.
        Dialect::Sqlite => {
            if inline_pk {
                sql.push_str(" PRIMARY KEY");
            }
            if column.auto_increment {
                sql.push_str(" AUTOINCREMENT");
            }
        }
        Dialect::Postgres => {
            if inline_pk {
                sql.push_str(" PRIMARY KEY");
            }
        }
        Dialect::MySql | Dialect::MariaDb | Dialect::H2(_) => {
            if column.auto_increment {
                sql.push_str(" AUTO_INCREMENT");
            }
            if inline_pk {
                sql.push_str(" PRIMARY KEY");
            }
        }
    }

    sql
}

const fn map_type(dialect: Dialect, sql_type: SqlType) -> &'static str {
    match dialect {
        // SQLite uses type affinity; booleans are stored as 0/1.
        Dialect::Sqlite => match sql_type {
            SqlType::Integer | SqlType::BigInt | SqlType::Boolean => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Text => "TEXT",
            SqlType::Blob => "BLOB",
        },
        Dialect::Postgres => match sql_type {
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "DOUBLE PRECISION",
            SqlType::Text => "TEXT",
            SqlType::Blob => "BYTEA",
            SqlType::Boolean => "BOOLEAN",
        },
        Dialect::MySql | Dialect::MariaDb | Dialect::H2(_) => match sql_type {
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "DOUBLE",
            SqlType::Text => "TEXT",
            SqlType::Blob => "BLOB",
            SqlType::Boolean => "BOOLEAN",
        },
    }
}
