//! Recovers the source table's quoted name and alias from a generated
//! SQL string, so the batch rewriter can hoist it.

use crate::dialect::Dialect;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `FROM "<table>"( AS <alias>)?` in quote-delimited dialects.
    static ref FROM_QUOTED: Regex =
        Regex::new(r#"FROM "(?P<table>[^"]+)"(?: AS (?P<alias>\S+))?"#).unwrap();
}

/// The pieces of a located table reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedTableAlias {
    /// The quoted table (or alias) token to hoist into the statement head.
    pub alias: String,
    /// The ` AS <alias>` suffix; empty when the dialect omits it.
    pub as_suffix: String,
    /// The query text after the extracted prefix.
    pub rest: String,
}

impl ExtractedTableAlias {
    pub fn is_empty(&self) -> bool {
        self.alias.is_empty()
    }
}

/// Locates the table-alias tokens of `sql` for the given dialect.
///
/// Dialects with no TOP/LIMIT-prefix ambiguity (MySQL) return a fixed
/// empty pair: rewriting is a no-op for table-alias purposes. Unmatched
/// quote-dialect input also yields empty fields; callers must check
/// before use.
pub fn extract_table_alias(sql: &str, dialect: &dyn Dialect) -> ExtractedTableAlias {
    match dialect.escape_start() {
        '[' => extract_bracketed(sql),
        '"' => split_from_clause(sql)
            .map(|(_, ex)| ex)
            .unwrap_or_else(|| ExtractedTableAlias {
                rest: sql.to_string(),
                ..Default::default()
            }),
        _ => ExtractedTableAlias {
            rest: sql.to_string(),
            ..Default::default()
        },
    }
}

/// Bracket-delimited dialects: the first escape-end marker after the
/// leading SELECT closes the alias token; the last escape-start marker
/// before it separates an optional `TOP(n)` fragment from the alias.
fn extract_bracketed(sql: &str) -> ExtractedTableAlias {
    debug_assert!(sql.trim_start().starts_with("SELECT"));
    let Some(end) = sql.find(']') else {
        return ExtractedTableAlias {
            rest: sql.to_string(),
            ..Default::default()
        };
    };
    let start = sql[..end].rfind('[').unwrap_or(0);
    ExtractedTableAlias {
        alias: sql[start..=end].to_string(),
        as_suffix: String::new(),
        rest: sql[end + 1..].to_string(),
    }
}

/// Splits `sql` at its first `FROM "<table>"( AS <alias>)?` clause,
/// returning the text before it and the extracted pieces.
pub(crate) fn split_from_clause(sql: &str) -> Option<(String, ExtractedTableAlias)> {
    let caps = FROM_QUOTED.captures(sql)?;
    let whole = caps.get(0)?;
    let alias = format!("\"{}\"", &caps["table"]);
    let as_suffix = caps
        .name("alias")
        .map(|a| format!(" AS {}", a.as_str()))
        .unwrap_or_default();
    Some((
        sql[..whole.start()].to_string(),
        ExtractedTableAlias {
            alias,
            as_suffix,
            rest: sql[whole.end()..].to_string(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySql, Postgres, SqlServer};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_bracketed_alias() {
        let ex = extract_table_alias("SELECT [i].[ItemId] FROM [Item] AS [i]", &SqlServer);
        assert_eq!(ex.alias, "[i]");
        assert_eq!(ex.as_suffix, "");
        assert_eq!(ex.rest, ".[ItemId] FROM [Item] AS [i]");
    }

    #[test]
    fn test_extract_bracketed_alias_skips_top_fragment() {
        let ex = extract_table_alias("SELECT TOP(1) [i].[ItemId] FROM [Item] AS [i]", &SqlServer);
        assert_eq!(ex.alias, "[i]");
    }

    #[test]
    fn test_extract_quoted_table_and_alias() {
        let ex = extract_table_alias(
            r#"UPDATE i SET "Description" = @p FROM "Item" AS i WHERE i."ItemId" <= 1"#,
            &Postgres,
        );
        assert_eq!(ex.alias, r#""Item""#);
        assert_eq!(ex.as_suffix, " AS i");
        assert_eq!(ex.rest, r#" WHERE i."ItemId" <= 1"#);
    }

    #[test]
    fn test_extract_quoted_without_alias() {
        let ex = extract_table_alias(r#"DELETE x FROM "Item" WHERE 1 = 1"#, &Postgres);
        assert_eq!(ex.alias, r#""Item""#);
        assert_eq!(ex.as_suffix, "");
    }

    #[test]
    fn test_extract_unmatched_input_yields_empty_fields() {
        let ex = extract_table_alias("SELECT 1", &Postgres);
        assert!(ex.is_empty());
        assert_eq!(ex.rest, "SELECT 1");
    }

    #[test]
    fn test_extract_is_fixed_empty_pair_for_mysql() {
        let ex = extract_table_alias("UPDATE i SET x = 1 FROM `Item` AS i", &MySql);
        assert!(ex.is_empty());
        assert_eq!(ex.as_suffix, "");
    }
}
