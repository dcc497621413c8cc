//! Defines the AST for a bulk UPDATE sourced from a staging table.

use crate::ast::{
    common::{Assignment, TableRef},
    expr::Expr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableRef,
    pub assignments: Vec<Assignment>,
    pub source: Option<UpdateSource>,
    pub where_clause: Option<Expr>,
}

/// How the staging table is brought into scope. The two shapes render
/// in different positions relative to SET.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateSource {
    /// `UPDATE t SET ... FROM s WHERE ...` (PostgreSQL, SQLite)
    From(TableRef),
    /// `UPDATE t INNER JOIN s ON ... SET ...` (MySQL)
    Join { table: TableRef, on: Expr },
}
