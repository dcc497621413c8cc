use crate::core::{data_type::ParamType, value::Value};
use serde::{Deserialize, Serialize};

/// A driver parameter: the (name, value, declared-type) triple handed to
/// the parameter normalizer before execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbParam {
    pub name: String,
    pub value: Value,
    pub param_type: ParamType,
}

impl DbParam {
    pub fn new(name: impl Into<String>, value: Value, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            value,
            param_type,
        }
    }
}
