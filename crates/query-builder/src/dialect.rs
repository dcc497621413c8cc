//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::data_type::SqlDialect;

/// How a dialect limits the row count of a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `SELECT TOP(n) ...`
    Top,
    /// `SELECT ... LIMIT n`
    Limit,
}

/// The native insert-or-update clause shape a dialect accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertStyle {
    /// `MERGE ... WHEN MATCHED ... WHEN NOT MATCHED ...`
    Merge,
    /// `INSERT ... ON CONFLICT (...) DO UPDATE / DO NOTHING`
    OnConflict,
    /// `INSERT ... ON DUPLICATE KEY UPDATE` (empty update set falls back
    /// to `INSERT IGNORE`)
    OnDuplicateKey,
}

/// How a dialect clones a table's column shape into a staging table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStyle {
    /// `SELECT <cols> INTO <staging> FROM <target> WHERE 1 = 0`
    SelectInto,
    /// `CREATE TABLE <staging> AS SELECT <cols> FROM <target> WHERE 1 = 0`
    CreateTableAs,
    /// `CREATE TABLE <staging> LIKE <target>`
    Like,
}

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - SQL Server uses brackets: `[my_column]`
    /// - PostgreSQL and SQLite use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// The character opening a quoted identifier.
    fn escape_start(&self) -> char;

    /// The character closing a quoted identifier.
    fn escape_end(&self) -> char;

    fn limit_style(&self) -> LimitStyle;

    fn upsert_style(&self) -> UpsertStyle;

    fn clone_style(&self) -> CloneStyle;

    /// The string concatenation operator accepted in embedded expressions.
    fn concat_operator(&self) -> &'static str;

    /// How the conflicting (to-be-inserted) row's column is referenced in
    /// the update branch of an upsert. The pseudo-table itself is never
    /// quoted.
    fn excluded_column(&self, column: &str) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

/// Capability lookup for a dialect tag. The descriptors are zero-sized
/// statics, safe for unsynchronized concurrent reads.
pub fn dialect_for(tag: SqlDialect) -> &'static dyn Dialect {
    match tag {
        SqlDialect::SqlServer => &SqlServer,
        SqlDialect::Postgres => &Postgres,
        SqlDialect::MySql => &MySql,
        SqlDialect::Sqlite => &Sqlite,
    }
}

#[derive(Debug, Clone)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{ident}]")
    }

    fn escape_start(&self) -> char {
        '['
    }

    fn escape_end(&self) -> char {
        ']'
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Top
    }

    fn upsert_style(&self) -> UpsertStyle {
        UpsertStyle::Merge
    }

    fn clone_style(&self) -> CloneStyle {
        CloneStyle::SelectInto
    }

    fn concat_operator(&self) -> &'static str {
        "+"
    }

    fn excluded_column(&self, _column: &str) -> String {
        // MERGE names both sides explicitly; no conflict pseudo-table.
        unreachable!("MERGE dialects reference the source row by alias")
    }

    fn name(&self) -> String {
        "SQL Server".into()
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn escape_start(&self) -> char {
        '"'
    }

    fn escape_end(&self) -> char {
        '"'
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Limit
    }

    fn upsert_style(&self) -> UpsertStyle {
        UpsertStyle::OnConflict
    }

    fn clone_style(&self) -> CloneStyle {
        CloneStyle::CreateTableAs
    }

    fn concat_operator(&self) -> &'static str {
        "||"
    }

    fn excluded_column(&self, column: &str) -> String {
        format!("EXCLUDED.{}", self.quote_identifier(column))
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#"`{ident}`"#)
    }

    fn escape_start(&self) -> char {
        '`'
    }

    fn escape_end(&self) -> char {
        '`'
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Limit
    }

    fn upsert_style(&self) -> UpsertStyle {
        UpsertStyle::OnDuplicateKey
    }

    fn clone_style(&self) -> CloneStyle {
        CloneStyle::Like
    }

    fn concat_operator(&self) -> &'static str {
        "+"
    }

    fn excluded_column(&self, column: &str) -> String {
        format!("VALUES({})", self.quote_identifier(column))
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn escape_start(&self) -> char {
        '"'
    }

    fn escape_end(&self) -> char {
        '"'
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Limit
    }

    fn upsert_style(&self) -> UpsertStyle {
        UpsertStyle::OnConflict
    }

    fn clone_style(&self) -> CloneStyle {
        CloneStyle::CreateTableAs
    }

    fn concat_operator(&self) -> &'static str {
        "||"
    }

    fn excluded_column(&self, column: &str) -> String {
        format!("EXCLUDED.{}", self.quote_identifier(column))
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_per_dialect() {
        assert_eq!(SqlServer.quote_identifier("Item"), "[Item]");
        assert_eq!(Postgres.quote_identifier("Item"), r#""Item""#);
        assert_eq!(MySql.quote_identifier("Item"), "`Item`");
        assert_eq!(Sqlite.quote_identifier("Item"), r#""Item""#);
    }

    #[test]
    fn test_excluded_column_leaves_pseudo_table_unquoted() {
        assert_eq!(Postgres.excluded_column("Name"), r#"EXCLUDED."Name""#);
        assert_eq!(MySql.excluded_column("Name"), "VALUES(`Name`)");
    }

    #[test]
    fn test_capability_lookup_is_exhaustive() {
        assert_eq!(dialect_for(SqlDialect::SqlServer).name(), "SQL Server");
        assert_eq!(dialect_for(SqlDialect::Postgres).name(), "PostgreSQL");
        assert_eq!(dialect_for(SqlDialect::MySql).name(), "MySQL");
        assert_eq!(dialect_for(SqlDialect::Sqlite).name(), "SQLite");
    }
}
