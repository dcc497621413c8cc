//! Defines the AST for cloning a table's column shape into a staging table.

use crate::ast::common::TableRef;

/// Creates `target` with the same column shape as `source`, empty.
/// Renders per the dialect's clone style (SELECT INTO, CREATE TABLE AS,
/// CREATE TABLE LIKE).
#[derive(Debug, Clone, PartialEq)]
pub struct CloneTable {
    pub source: TableRef,
    pub target: TableRef,
    pub columns: Vec<String>,
}
