//! Defines the AST for the source SELECT feeding a bulk statement.

use crate::ast::{common::TableRef, expr::Expr};

/// A flat projection over one table, optionally row-limited.
///
/// The limit renders as `TOP(n)` or a trailing `LIMIT n` depending on
/// the dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub columns: Vec<Expr>,
    pub from: TableRef,
    pub row_limit: Option<u64>,
}
