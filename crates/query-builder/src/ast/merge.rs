//! Defines the AST for SQL MERGE statements.

use crate::ast::{
    common::{Assignment, TableRef},
    expr::Expr,
    select::Select,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub target: TableRef,
    pub target_alias: String,
    /// The staging-table SELECT in the USING clause; its row limit
    /// renders as `TOP(n)`.
    pub source: Select,
    pub source_alias: String,
    pub on: Expr,
    pub when_matched: Option<MergeMatched>,
    pub when_not_matched: Option<MergeNotMatched>,
    /// `WHEN NOT MATCHED BY SOURCE THEN DELETE`.
    pub delete_unmatched_by_source: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeMatched {
    Update {
        assignments: Vec<Assignment>,
        /// Extra condition on the match, `WHEN MATCHED AND <pred>`.
        predicate: Option<String>,
    },
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeNotMatched {
    pub columns: Vec<String>,
    pub values: Vec<Expr>,
}
