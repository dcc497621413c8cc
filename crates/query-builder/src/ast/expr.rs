//! Defines the AST for SQL expressions.

use crate::ast::common::TableRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or alias-qualified identifier, e.g., `name` or `s.name`.
    Identifier(Ident),

    /// A fully table-qualified column, e.g., `"dbo"."Item"."ItemId"`.
    Column(ColumnRef),

    /// The conflicting row's column in the update branch of an upsert.
    /// Spelled per dialect (`EXCLUDED."c"`, `` VALUES(`c`) ``).
    Excluded(String),

    /// Caller-supplied text emitted verbatim, e.g. a custom update
    /// predicate. Never validated.
    Literal(String),

    /// A binary operation, e.g., `a = b` or `a AND b`.
    BinaryOp(Box<BinaryOp>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 's' in 's.id'
    pub name: String,              // e.g., the 'id' in 's.id'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: TableRef,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Logical
    And,
    Or,

    // String concatenation; operator text comes from the dialect.
    Concat,
}

impl Expr {
    /// Folds expressions into a single AND-conjoined expression.
    pub fn conjoin(exprs: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        exprs.into_iter().reduce(|acc, e| {
            Expr::BinaryOp(Box::new(BinaryOp {
                left: acc,
                op: BinaryOperator::And,
                right: e,
            }))
        })
    }

    pub fn eq(left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left,
            op: BinaryOperator::Eq,
            right,
        }))
    }
}
