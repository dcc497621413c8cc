//! Defines the AST for a bulk DELETE keyed on a staging table.

use crate::ast::{common::TableRef, expr::Expr};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: TableRef,
    pub source: DeleteSource,
}

/// Per-dialect join shape for matching staged keys.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteSource {
    /// `DELETE FROM t USING s WHERE ...` (PostgreSQL)
    Using { table: TableRef, on: Expr },
    /// `DELETE t FROM t INNER JOIN s ON ...` (MySQL)
    Join { table: TableRef, on: Expr },
    /// `DELETE FROM t WHERE EXISTS (SELECT 1 FROM s WHERE ...)` (SQLite)
    Exists { table: TableRef, on: Expr },
}
