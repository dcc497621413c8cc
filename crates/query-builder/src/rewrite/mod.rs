//! Rewrites ORM-emitted single-alias batch UPDATE/DELETE statements into
//! the multi-table syntax the target engine actually accepts.
//!
//! The input is assumed to match one fixed shape:
//! `UPDATE <alias> SET ... FROM <table> AS <alias>
//!  [INNER JOIN <t2> AS <a2> ON <cond>]* WHERE <pred>`
//! (or the analogous DELETE). This is a structural text transformation
//! anchored on the original table/alias tokens, not a SQL parser;
//! input outside that shape is a contract violation.

use crate::dialect::Dialect;
use tracing::warn;

pub mod alias;

pub use alias::{ExtractedTableAlias, extract_table_alias};

use alias::split_from_clause;

/// Rewrites a batch UPDATE/DELETE for the dialect. Engines whose UPDATE
/// accepts the ORM shape as-is (SQL Server, MySQL) pass through
/// unchanged; rewriting applies to the quote-delimited dialects.
/// Already-rewritten input is returned unchanged.
pub fn rewrite_batch(sql: &str, dialect: &dyn Dialect) -> String {
    if dialect.escape_start() != '"' {
        return sql.to_string();
    }
    if let Some(stripped) = sql.strip_prefix("UPDATE ") {
        rewrite_update(sql, stripped)
    } else if sql.starts_with("DELETE ") {
        rewrite_delete(sql)
    } else {
        debug_assert!(false, "batch rewriter given non-UPDATE/DELETE input");
        warn!("batch rewriter given non-UPDATE/DELETE input; passing through");
        sql.to_string()
    }
}

/// `UPDATE a SET ... FROM t AS a [joins] WHERE p`
/// -> `UPDATE t AS a SET ... [FROM t2 AS a2, ...] WHERE p [AND cond]*`
fn rewrite_update(sql: &str, after_keyword: &str) -> String {
    let Some(set_pos) = sql.find(" SET ") else {
        debug_assert!(false, "batch update without SET clause");
        return sql.to_string();
    };
    let target = &after_keyword[..set_pos - "UPDATE ".len()];
    if target.contains(' ') || target.starts_with('"') {
        // Target already carries the hoisted table; second pass is a no-op.
        return sql.to_string();
    }

    let Some((before, ex)) = split_from_clause(sql) else {
        debug_assert!(false, "batch update without FROM clause");
        return sql.to_string();
    };
    let set_text = before[set_pos + " SET ".len()..].trim_end();
    let (join_tables, join_conds, where_text) = split_joins(&ex.rest);

    let mut out = format!("UPDATE {}{} SET {}", ex.alias, ex.as_suffix, set_text);
    if !join_tables.is_empty() {
        out.push_str(" FROM ");
        out.push_str(&join_tables.join(", "));
    }
    push_where(&mut out, where_text, &join_conds);
    out
}

/// `DELETE a FROM t AS a [joins] WHERE p`
/// -> `DELETE FROM t AS a [USING t2 AS a2, ...] WHERE p [AND cond]*`
fn rewrite_delete(sql: &str) -> String {
    if sql.starts_with("DELETE FROM ") {
        return sql.to_string();
    }
    let Some((_, ex)) = split_from_clause(sql) else {
        debug_assert!(false, "batch delete without FROM clause");
        return sql.to_string();
    };
    let (join_tables, join_conds, where_text) = split_joins(&ex.rest);

    let mut out = format!("DELETE FROM {}{}", ex.alias, ex.as_suffix);
    if !join_tables.is_empty() {
        out.push_str(" USING ");
        out.push_str(&join_tables.join(", "));
    }
    push_where(&mut out, where_text, &join_conds);
    out
}

/// Splits the text after the hoisted FROM clause into joined tables,
/// their ON conditions, and the WHERE predicate.
fn split_joins(tail: &str) -> (Vec<String>, Vec<String>, String) {
    let tail = tail.trim_start();
    let (join_part, where_text) = match tail.find("WHERE ") {
        Some(pos) => (&tail[..pos], tail[pos + "WHERE ".len()..].to_string()),
        None => (tail, String::new()),
    };

    let mut tables = Vec::new();
    let mut conds = Vec::new();
    for segment in join_part.split("INNER JOIN ").skip(1) {
        match segment.split_once(" ON ") {
            Some((table, cond)) => {
                tables.push(table.trim_end().to_string());
                conds.push(cond.trim_end().to_string());
            }
            None => debug_assert!(false, "join segment without ON condition"),
        }
    }
    (tables, conds, where_text)
}

fn push_where(out: &mut String, where_text: String, join_conds: &[String]) {
    let where_text = where_text.trim_end();
    if where_text.is_empty() && join_conds.is_empty() {
        return;
    }
    out.push_str(" WHERE ");
    out.push_str(where_text);
    for cond in join_conds {
        if !out.ends_with("WHERE ") {
            out.push_str(" AND ");
        }
        out.push_str(cond);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Postgres, SqlServer, Sqlite};
    use pretty_assertions::assert_eq;

    const PLAIN: &str =
        r#"UPDATE i SET "Description" = @Description FROM "Item" AS i WHERE i."ItemId" <= 1"#;

    const JOINED: &str = concat!(
        r#"UPDATE i SET "Description" = @Description FROM "Item" AS i "#,
        r#"INNER JOIN "User" AS u ON i."UserId" = u."Id" WHERE i."ItemId" <= 1"#
    );

    #[test]
    fn test_rewrite_hoists_table_without_join() {
        assert_eq!(
            rewrite_batch(PLAIN, &Postgres),
            r#"UPDATE "Item" AS i SET "Description" = @Description WHERE i."ItemId" <= 1"#
        );
    }

    #[test]
    fn test_rewrite_moves_join_condition_into_where() {
        assert_eq!(
            rewrite_batch(JOINED, &Postgres),
            concat!(
                r#"UPDATE "Item" AS i SET "Description" = @Description "#,
                r#"FROM "User" AS u WHERE i."ItemId" <= 1 AND i."UserId" = u."Id""#
            )
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewrite_batch(PLAIN, &Sqlite);
        assert_eq!(rewrite_batch(&once, &Sqlite), once);

        let once = rewrite_batch(JOINED, &Sqlite);
        assert_eq!(rewrite_batch(&once, &Sqlite), once);
    }

    #[test]
    fn test_rewrite_is_pass_through_for_sql_server() {
        assert_eq!(rewrite_batch(PLAIN, &SqlServer), PLAIN);
    }

    #[test]
    fn test_rewrite_delete_hoists_into_delete_from() {
        let sql = r#"DELETE i FROM "Item" AS i WHERE i."ItemId" <= 1"#;
        assert_eq!(
            rewrite_batch(sql, &Postgres),
            r#"DELETE FROM "Item" AS i WHERE i."ItemId" <= 1"#
        );
    }

    #[test]
    fn test_rewrite_delete_with_join_uses_using() {
        let sql = concat!(
            r#"DELETE i FROM "Item" AS i "#,
            r#"INNER JOIN "User" AS u ON i."UserId" = u."Id" WHERE u."Banned" = TRUE"#
        );
        assert_eq!(
            rewrite_batch(sql, &Postgres),
            concat!(
                r#"DELETE FROM "Item" AS i USING "User" AS u "#,
                r#"WHERE u."Banned" = TRUE AND i."UserId" = u."Id""#
            )
        );
    }

    #[test]
    fn test_extractor_round_trip_is_referentially_consistent() {
        let ex = extract_table_alias(PLAIN, &Postgres);
        let rewritten = rewrite_batch(PLAIN, &Postgres);
        // The hoisted statement still names the same quoted table and
        // carries the same alias suffix the extractor recovered.
        assert!(rewritten.contains(&ex.alias));
        assert!(rewritten.contains(&ex.as_suffix));
    }
}
