//! Defines the AST for an INSERT statement sourced from a staging table.

use crate::ast::{common::Assignment, common::TableRef, select::Select};

/// Represents a complete INSERT-from-SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    /// The SELECT over the staging table supplying the rows.
    pub select: Select,
    /// Wrap the source SELECT in parentheses (the upsert shapes do).
    pub wrap_select: bool,
    /// Optional conflict-handling clause.
    pub conflict: Option<ConflictClause>,
    /// MySQL `INSERT IGNORE` (the empty-update-set upsert fallback).
    pub ignore: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictClause {
    /// PostgreSQL / SQLite `ON CONFLICT (<cols>) <action>`.
    OnConflict {
        columns: Vec<String>,
        action: ConflictAction,
    },
    /// MySQL `ON DUPLICATE KEY UPDATE <assignments>`.
    OnDuplicateKey { assignments: Vec<Assignment> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictAction {
    DoNothing,
    DoUpdate {
        assignments: Vec<Assignment>,
        /// Pre-rendered custom predicate text for a trailing WHERE.
        predicate: Option<String>,
    },
}
