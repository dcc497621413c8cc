use crate::core::data_type::{ParamType, SqlDialect};
use crate::schema::table_info::OperationType;
use thiserror::Error;

/// Configuration errors raised before any SQL text is produced.
///
/// These are fatal: the caller must fix the `TableInfo` or the dialect
/// selection, retrying is never useful.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SqlGenError {
    #[error("operation {operation} requires at least one key column")]
    MissingKeyColumns { operation: OperationType },

    #[error("table {table} has an empty column set")]
    EmptyColumnSet { table: String },

    #[error("table {table} has no non-key columns to update")]
    EmptyUpdateSet { table: String },

    #[error("operation {operation} is not supported on {dialect}")]
    UnsupportedOperation {
        operation: OperationType,
        dialect: SqlDialect,
    },
}

/// Why a declared parameter type could not be widened.
///
/// The first two variants are the known driver refusals for array- and
/// document-shaped values; the normalizer recovers from them by passing
/// the parameter through unchanged. `Incompatible` always propagates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NarrowError {
    #[error("no widening exists for array-shaped value ({0})")]
    ArrayShapedValue(&'static str),

    #[error("no widening exists for structured document value")]
    StructuredDocumentValue,

    #[error("cannot widen {from} parameter holding {value_kind} value")]
    Incompatible {
        from: ParamType,
        value_kind: &'static str,
    },
}

impl NarrowError {
    /// True for the fixed allow-list of failures the normalizer swallows.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NarrowError::ArrayShapedValue(_) | NarrowError::StructuredDocumentValue
        )
    }
}
