//! Adjusts declared driver parameter types before execution so no
//! fractional-second precision is lost on the wire.

use model::{
    core::{data_type::ParamType, param::DbParam, value::Value},
    errors::NarrowError,
};
use tracing::debug;

/// Widens every generic `DateTime` parameter to the most
/// precision-preserving variant the engine exposes (`DateTime2`).
///
/// Drivers refuse the widening for array- and document-shaped values;
/// those parameters pass through unchanged. Any other refusal
/// propagates. Output length and order always equal the input's, and
/// the function is idempotent.
pub fn normalize_params(params: Vec<DbParam>) -> Result<Vec<DbParam>, NarrowError> {
    params.into_iter().map(normalize_param).collect()
}

fn normalize_param(mut param: DbParam) -> Result<DbParam, NarrowError> {
    if !param.param_type.is_generic_datetime() {
        return Ok(param);
    }
    match widened_type(&param.value) {
        Ok(widened) => {
            param.param_type = widened;
            Ok(param)
        }
        Err(err) if err.is_recoverable() => {
            debug!(param = %param.name, %err, "parameter passes through unwidened");
            Ok(param)
        }
        Err(err) => Err(err),
    }
}

/// The precision-preserving declared type for a generic date+time
/// parameter holding `value`.
fn widened_type(value: &Value) -> Result<ParamType, NarrowError> {
    match value {
        Value::Timestamp(_) | Value::Date(_) | Value::String(_) | Value::Null => {
            Ok(ParamType::DateTime2)
        }
        Value::StringArray(_) => Err(NarrowError::ArrayShapedValue("string array")),
        Value::Bytes(_) => Err(NarrowError::ArrayShapedValue("byte array")),
        Value::Json(_) => Err(NarrowError::StructuredDocumentValue),
        other => Err(NarrowError::Incompatible {
            from: ParamType::DateTime,
            value_kind: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn ts_param(name: &str) -> DbParam {
        DbParam::new(
            name,
            Value::Timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()),
            ParamType::DateTime,
        )
    }

    #[test]
    fn test_widens_generic_datetime() {
        let out = normalize_params(vec![ts_param("@CreatedAt")]).unwrap();
        assert_eq!(out[0].param_type, ParamType::DateTime2);
    }

    #[test]
    fn test_leaves_other_types_untouched() {
        let input = vec![
            DbParam::new("@Name", Value::String("x".into()), ParamType::String),
            DbParam::new("@Count", Value::Int(3), ParamType::Int32),
        ];
        let out = normalize_params(input.clone()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_array_and_json_shapes_pass_through() {
        let input = vec![
            DbParam::new(
                "@Tags",
                Value::StringArray(vec!["a".into()]),
                ParamType::DateTime,
            ),
            DbParam::new("@Blob", Value::Bytes(vec![1, 2]), ParamType::DateTime),
            DbParam::new(
                "@Doc",
                Value::Json(serde_json::json!({"k": 1})),
                ParamType::DateTime,
            ),
        ];
        let out = normalize_params(input.clone()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_incompatible_value_propagates() {
        let err = normalize_params(vec![DbParam::new(
            "@Oops",
            Value::Boolean(true),
            ParamType::DateTime,
        )])
        .unwrap_err();
        assert_eq!(
            err,
            NarrowError::Incompatible {
                from: ParamType::DateTime,
                value_kind: "boolean",
            }
        );
    }

    #[test]
    fn test_preserves_length_and_order() {
        let input = vec![
            ts_param("@A"),
            DbParam::new("@B", Value::Int(1), ParamType::Int32),
            ts_param("@C"),
        ];
        let out = normalize_params(input).unwrap();
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["@A", "@B", "@C"]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            ts_param("@A"),
            DbParam::new(
                "@Tags",
                Value::StringArray(vec!["a".into()]),
                ParamType::DateTime,
            ),
        ];
        let once = normalize_params(input).unwrap();
        let twice = normalize_params(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
