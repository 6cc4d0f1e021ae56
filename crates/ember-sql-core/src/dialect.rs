//! SQL dialect descriptors.
//!
//! Different databases have slightly different SQL syntax and feature
//! sets. Dialects are modeled as a closed enum rather than a trait so
//! that every capability lookup is an exhaustive match: adding a new
//! database forces an explicit decision at each call site instead of
//! inheriting a silent default.

/// Compatibility mode of the embedded H2 engine.
///
/// H2 can emulate other products' dialects per connection (`MODE=MySQL`
/// in the JDBC URL). The mode is part of the dialect value, so a
/// descriptor never changes meaning mid-call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum H2Mode {
    /// H2's own SQL dialect.
    Native,
    /// H2 emulating MySQL syntax and semantics.
    MySql,
}

/// A target database product, including its compatibility mode where
/// the product has one.
///
/// A `Dialect` is an immutable descriptor selected once per
/// connection/session and passed explicitly into statement compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MySQL.
    MySql,
    /// MariaDB.
    MariaDb,
    /// SQLite.
    Sqlite,
    /// PostgreSQL.
    Postgres,
    /// The embedded H2 engine, in the given compatibility mode.
    H2(H2Mode),
}

impl Dialect {
    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
            Self::H2(H2Mode::Native) => "h2",
            Self::H2(H2Mode::MySql) => "h2-mysql",
        }
    }

    /// Returns whether the dialect natively supports `REPLACE INTO`
    /// (delete-then-insert on primary/unique key conflict).
    ///
    /// This is a total function over dialects. A dialect with partial
    /// or ambiguous replace support must answer `false` here so the
    /// compiler rejects the operation instead of emitting best-effort
    /// SQL with different conflict semantics.
    #[must_use]
    pub const fn supports_replace(self) -> bool {
        match self {
            Self::MySql | Self::MariaDb | Self::Sqlite | Self::H2(H2Mode::MySql) => true,
            Self::Postgres | Self::H2(H2Mode::Native) => false,
        }
    }

    /// Returns the identifier quote character.
    #[must_use]
    pub const fn identifier_quote(self) -> char {
        match self {
            Self::MySql | Self::MariaDb => '`',
            // H2 keeps double quotes even in MySQL mode.
            Self::Sqlite | Self::Postgres | Self::H2(_) => '"',
        }
    }

    /// Quotes an identifier for this dialect.
    #[must_use]
    pub fn quote_identifier(self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_capability_table() {
        assert!(Dialect::MySql.supports_replace());
        assert!(Dialect::MariaDb.supports_replace());
        assert!(Dialect::Sqlite.supports_replace());
        assert!(Dialect::H2(H2Mode::MySql).supports_replace());
        assert!(!Dialect::Postgres.supports_replace());
        assert!(!Dialect::H2(H2Mode::Native).supports_replace());
    }

    #[test]
    fn test_dialect_names() {
        assert_eq!(Dialect::H2(H2Mode::Native).name(), "h2");
        assert_eq!(Dialect::H2(H2Mode::MySql).name(), "h2-mysql");
        assert_eq!(Dialect::Sqlite.name(), "sqlite");
    }

    #[test]
    fn test_identifier_quoting() {
        assert_eq!(Dialect::MySql.quote_identifier("id"), "`id`");
        assert_eq!(Dialect::H2(H2Mode::MySql).quote_identifier("id"), "\"id\"");
        assert_eq!(Dialect::Postgres.quote_identifier("id"), "\"id\"");
    }
}
