//! The merge/upsert generator: one complete, `;`-terminated statement
//! against the target table using the staging table as source,
//! specialized per dialect.

use crate::{
    ast::{
        common::{Assignment, TableRef},
        delete::{Delete, DeleteSource},
        expr::{ColumnRef, Expr},
        insert::{ConflictAction, ConflictClause, Insert},
        merge::{Merge, MergeMatched, MergeNotMatched},
        select::Select,
        update::{Update, UpdateSource},
    },
    build::{staging_ref, target_ref},
    dialect::{Dialect, UpsertStyle, dialect_for},
    ident, qual_ident,
    render::{Render, Renderer},
};
use model::{
    core::data_type::SqlDialect,
    errors::SqlGenError,
    schema::{OperationType, TableInfo},
};
use tracing::debug;

const TARGET_ALIAS: &str = "T";
const SOURCE_ALIAS: &str = "S";

/// Generates the bulk statement for `operation` against `info`'s target
/// table, sourced from its staging table.
///
/// `row_limit` caps the source SELECT: `TOP(n)` on SQL Server, and a
/// `LIMIT n` on the insert-only-on-conflict branch of LIMIT-style
/// dialects (where at most one conflict-free row must be inserted).
pub fn build_statement(
    info: &TableInfo,
    operation: OperationType,
    dialect: SqlDialect,
    row_limit: Option<u64>,
) -> Result<String, SqlGenError> {
    info.validate(operation)?;
    if operation == OperationType::InsertOrUpdateOrDelete && dialect != SqlDialect::SqlServer {
        return Err(SqlGenError::UnsupportedOperation { operation, dialect });
    }

    let d = dialect_for(dialect);
    match d.upsert_style() {
        UpsertStyle::Merge => merge_statement(info, operation, d, row_limit),
        UpsertStyle::OnConflict => conflict_statement(info, operation, dialect, d, row_limit),
        UpsertStyle::OnDuplicateKey => duplicate_key_statement(info, operation, d, row_limit),
    }
}

/// Update-set columns with the key columns filtered out; keys are never
/// assigned in an update branch.
fn effective_update_columns(info: &TableInfo) -> Vec<String> {
    info.update_column_names()
        .iter()
        .filter(|c| !info.key_columns.iter().any(|k| k == *c))
        .map(|c| c.to_string())
        .collect()
}

fn all_columns(info: &TableInfo) -> Vec<String> {
    info.column_names().iter().map(|c| c.to_string()).collect()
}

fn source_select(info: &TableInfo, row_limit: Option<u64>) -> Select {
    Select {
        columns: info.column_names().iter().map(|c| ident(c)).collect(),
        from: staging_ref(info),
        row_limit,
    }
}

fn table_col(table: &TableRef, name: &str) -> Expr {
    Expr::Column(ColumnRef {
        table: table.clone(),
        name: name.to_string(),
    })
}

/// `left.k1 = right.k1 AND left.k2 = right.k2 ...` over the key columns.
fn key_match(info: &TableInfo, left: &TableRef, right: &TableRef) -> Result<Expr, SqlGenError> {
    Expr::conjoin(
        info.key_columns
            .iter()
            .map(|k| Expr::eq(table_col(left, k), table_col(right, k))),
    )
    .ok_or(SqlGenError::MissingKeyColumns {
        operation: OperationType::Update,
    })
}

fn render(ast: &dyn Render, d: &dyn Dialect) -> String {
    let mut r = Renderer::new(d);
    ast.render(&mut r);
    r.finish()
}

fn rendered_table(table: &TableRef, d: &dyn Dialect) -> String {
    let mut r = Renderer::new(d);
    r.render_table_ref(table);
    r.finish()
}

/// PostgreSQL / SQLite: the `ON CONFLICT` family.
fn conflict_statement(
    info: &TableInfo,
    operation: OperationType,
    tag: SqlDialect,
    d: &dyn Dialect,
    row_limit: Option<u64>,
) -> Result<String, SqlGenError> {
    let target = target_ref(info);
    let staging = staging_ref(info);

    match operation {
        OperationType::Insert | OperationType::InsertOrUpdate => {
            let mut insert = Insert {
                table: target.clone(),
                columns: all_columns(info),
                select: source_select(info, None),
                wrap_select: true,
                conflict: None,
                ignore: false,
            };

            if operation == OperationType::InsertOrUpdate {
                let update_cols = effective_update_columns(info);
                let action = if update_cols.is_empty() {
                    // Insert-only-on-conflict; the row limit keeps the
                    // conflict-free path to a single row when requested.
                    insert.select.row_limit = row_limit;
                    ConflictAction::DoNothing
                } else {
                    let assignments = update_cols
                        .iter()
                        .map(|c| Assignment {
                            target: ident(c),
                            value: Expr::Excluded(c.clone()),
                        })
                        .collect();
                    let predicate = info
                        .update_predicate
                        .as_ref()
                        .map(|p| p(&rendered_table(&target, d), "EXCLUDED"));
                    ConflictAction::DoUpdate {
                        assignments,
                        predicate,
                    }
                };
                insert.conflict = Some(ConflictClause::OnConflict {
                    columns: info.key_columns.clone(),
                    action,
                });
            }
            Ok(render(&insert, d))
        }
        OperationType::Update => {
            let update_cols = effective_update_columns(info);
            if update_cols.is_empty() {
                return Err(SqlGenError::EmptyUpdateSet {
                    table: info.table.clone(),
                });
            }
            let ast = Update {
                table: target.clone(),
                assignments: update_cols
                    .iter()
                    .map(|c| Assignment {
                        target: ident(c),
                        value: table_col(&staging, c),
                    })
                    .collect(),
                source: Some(UpdateSource::From(staging.clone())),
                where_clause: Some(key_match(info, &target, &staging)?),
            };
            Ok(render(&ast, d))
        }
        OperationType::Delete => {
            let on = key_match(info, &target, &staging)?;
            let source = if tag == SqlDialect::Postgres {
                DeleteSource::Using { table: staging, on }
            } else {
                DeleteSource::Exists { table: staging, on }
            };
            let ast = Delete {
                table: target,
                source,
            };
            Ok(render(&ast, d))
        }
        OperationType::InsertOrUpdateOrDelete => Err(SqlGenError::UnsupportedOperation {
            operation,
            dialect: tag,
        }),
    }
}

/// MySQL: `ON DUPLICATE KEY UPDATE`, falling back to `INSERT IGNORE`
/// when there is nothing to assign on conflict.
fn duplicate_key_statement(
    info: &TableInfo,
    operation: OperationType,
    d: &dyn Dialect,
    row_limit: Option<u64>,
) -> Result<String, SqlGenError> {
    let target = target_ref(info);
    let staging = staging_ref(info);

    match operation {
        OperationType::Insert | OperationType::InsertOrUpdate => {
            let mut insert = Insert {
                table: target,
                columns: all_columns(info),
                select: source_select(info, None),
                wrap_select: true,
                conflict: None,
                ignore: false,
            };

            if operation == OperationType::InsertOrUpdate {
                if info.update_predicate.is_some() {
                    debug!("ON DUPLICATE KEY UPDATE has no conditional form; custom update predicate ignored");
                }
                let update_cols = effective_update_columns(info);
                if update_cols.is_empty() {
                    insert.ignore = true;
                    insert.select.row_limit = row_limit;
                } else {
                    insert.conflict = Some(ConflictClause::OnDuplicateKey {
                        assignments: update_cols
                            .iter()
                            .map(|c| Assignment {
                                target: ident(c),
                                value: Expr::Excluded(c.clone()),
                            })
                            .collect(),
                    });
                }
            }
            Ok(render(&insert, d))
        }
        OperationType::Update => {
            let update_cols = effective_update_columns(info);
            if update_cols.is_empty() {
                return Err(SqlGenError::EmptyUpdateSet {
                    table: info.table.clone(),
                });
            }
            let on = key_match(info, &target, &staging)?;
            let ast = Update {
                table: target.clone(),
                assignments: update_cols
                    .iter()
                    .map(|c| Assignment {
                        target: table_col(&target, c),
                        value: table_col(&staging, c),
                    })
                    .collect(),
                source: Some(UpdateSource::Join { table: staging, on }),
                where_clause: None,
            };
            Ok(render(&ast, d))
        }
        OperationType::Delete => {
            let on = key_match(info, &target, &staging)?;
            let ast = Delete {
                table: target,
                source: DeleteSource::Join { table: staging, on },
            };
            Ok(render(&ast, d))
        }
        OperationType::InsertOrUpdateOrDelete => Err(SqlGenError::UnsupportedOperation {
            operation,
            dialect: SqlDialect::MySql,
        }),
    }
}

/// SQL Server: native MERGE.
fn merge_statement(
    info: &TableInfo,
    operation: OperationType,
    d: &dyn Dialect,
    row_limit: Option<u64>,
) -> Result<String, SqlGenError> {
    let target = target_ref(info);

    if operation == OperationType::Insert {
        // T-SQL rejects a parenthesized SELECT as the insert source.
        let insert = Insert {
            table: target,
            columns: all_columns(info),
            select: source_select(info, row_limit),
            wrap_select: false,
            conflict: None,
            ignore: false,
        };
        return Ok(render(&insert, d));
    }

    let on = Expr::conjoin(
        info.key_columns
            .iter()
            .map(|k| Expr::eq(qual_ident(TARGET_ALIAS, k), qual_ident(SOURCE_ALIAS, k))),
    )
    .ok_or(SqlGenError::MissingKeyColumns { operation })?;

    let matched_update = || -> Result<MergeMatched, SqlGenError> {
        let update_cols = effective_update_columns(info);
        if update_cols.is_empty() {
            return Err(SqlGenError::EmptyUpdateSet {
                table: info.table.clone(),
            });
        }
        let predicate = info.update_predicate.as_ref().map(|p| {
            p(
                &d.quote_identifier(TARGET_ALIAS),
                &d.quote_identifier(SOURCE_ALIAS),
            )
        });
        Ok(MergeMatched::Update {
            assignments: update_cols
                .iter()
                .map(|c| Assignment {
                    target: qual_ident(TARGET_ALIAS, c),
                    value: qual_ident(SOURCE_ALIAS, c),
                })
                .collect(),
            predicate,
        })
    };

    let not_matched_insert = || MergeNotMatched {
        columns: all_columns(info),
        values: info
            .column_names()
            .iter()
            .map(|c| qual_ident(SOURCE_ALIAS, c))
            .collect(),
    };

    let (when_matched, when_not_matched, delete_unmatched) = match operation {
        OperationType::Update => (Some(matched_update()?), None, false),
        OperationType::Delete => (Some(MergeMatched::Delete), None, false),
        OperationType::InsertOrUpdate | OperationType::InsertOrUpdateOrDelete => {
            // An empty update set never emits a zero-assignment SET;
            // the statement degrades to insert-only-on-no-match.
            let matched = if effective_update_columns(info).is_empty() {
                None
            } else {
                Some(matched_update()?)
            };
            (
                matched,
                Some(not_matched_insert()),
                operation == OperationType::InsertOrUpdateOrDelete,
            )
        }
        OperationType::Insert => unreachable!("handled above"),
    };

    let ast = Merge {
        target,
        target_alias: TARGET_ALIAS.to_string(),
        source: source_select(info, row_limit),
        source_alias: SOURCE_ALIAS.to_string(),
        on,
        when_matched,
        when_not_matched,
        delete_unmatched_by_source: delete_unmatched,
    };
    Ok(render(&ast, d))
}
