use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the target database engine.
///
/// Selects identifier quoting, upsert clause shape, and row-limiting
/// syntax everywhere above this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlDialect {
    SqlServer,
    Postgres,
    MySql,
    Sqlite,
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlDialect::SqlServer => "SQL Server",
            SqlDialect::Postgres => "PostgreSQL",
            SqlDialect::MySql => "MySQL",
            SqlDialect::Sqlite => "SQLite",
        };
        write!(f, "{name}")
    }
}

/// The declared wire type of a driver parameter.
///
/// `DateTime` is the generic low-precision timestamp type; `DateTime2`
/// is the most precision-preserving variant an engine exposes. The
/// parameter normalizer widens the former into the latter so fractional
/// seconds survive the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Bool,
    Int32,
    Int64,
    Double,
    Decimal,
    String,
    Guid,
    Binary,
    Date,
    Time,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Json,
}

impl ParamType {
    /// Whether this is the generic date+time type subject to widening.
    pub fn is_generic_datetime(&self) -> bool {
        matches!(self, ParamType::DateTime)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
