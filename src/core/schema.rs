//! Parameter schemas and argument validation.
//!
//! Each helper declares its parameters as `Param` records; the invoker
//! validates supplied values against them in declaration order before the
//! implementation runs. Validation may coerce a value (numeric string to
//! number, `"true"`/`"false"` to boolean); the coerced value is what the
//! implementation receives.

use serde_json::{Number, Value};

/// Semantic type of a helper parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Any,
    StringOrList,
    List,
}

impl ParamType {
    pub fn label(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Any => "any",
            ParamType::StringOrList => "string or list",
            ParamType::List => "list",
        }
    }
}

/// A declared helper parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub description: &'static str,
    pub param_type: ParamType,
    pub required: bool,
}

impl Param {
    pub fn required(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            description,
            param_type,
            required: true,
        }
    }

    pub fn optional(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            description,
            param_type,
            required: false,
        }
    }
}

pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate a value against a parameter type, returning the value to pass to
/// the implementation (coerced where the type allows it) or a human-readable
/// detail string on failure.
pub fn validate(value: &Value, param_type: ParamType) -> std::result::Result<Value, String> {
    match param_type {
        ParamType::Any => Ok(value.clone()),
        ParamType::String => match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(type_mismatch("string", other)),
        },
        ParamType::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            Value::String(s) => coerce_number(s),
            other => Err(type_mismatch("number", other)),
        },
        ParamType::Boolean => match value {
            Value::Bool(_) => Ok(value.clone()),
            Value::String(s) if s == "true" => Ok(Value::Bool(true)),
            Value::String(s) if s == "false" => Ok(Value::Bool(false)),
            other => Err(type_mismatch("boolean", other)),
        },
        ParamType::StringOrList => match value {
            Value::String(_) | Value::Array(_) => Ok(value.clone()),
            other => Err(type_mismatch("string or list", other)),
        },
        ParamType::List => match value {
            Value::Array(_) => Ok(value.clone()),
            other => Err(type_mismatch("list", other)),
        },
    }
}

fn type_mismatch(expected: &str, actual: &Value) -> String {
    format!("expected {}, got {}", expected, value_type_name(actual))
}

fn coerce_number(s: &str) -> std::result::Result<Value, String> {
    if let Ok(i) = s.parse::<i64>() {
        return Ok(Value::Number(Number::from(i)));
    }
    if let Ok(f) = s.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Ok(Value::Number(n));
        }
    }
    Err(format!("expected number, got non-numeric string \"{}\"", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_accepts_string_only() {
        assert!(validate(&json!("hi"), ParamType::String).is_ok());
        assert!(validate(&json!(5), ParamType::String).is_err());
        assert!(validate(&json!(null), ParamType::String).is_err());
    }

    #[test]
    fn number_coerces_integer_string() {
        assert_eq!(validate(&json!("42"), ParamType::Number).unwrap(), json!(42));
    }

    #[test]
    fn number_coerces_float_string() {
        assert_eq!(
            validate(&json!("2.5"), ParamType::Number).unwrap(),
            json!(2.5)
        );
    }

    #[test]
    fn number_rejects_non_numeric_string() {
        let detail = validate(&json!("abc"), ParamType::Number).unwrap_err();
        assert!(detail.contains("non-numeric"));
    }

    #[test]
    fn number_keeps_negative_values() {
        assert_eq!(validate(&json!(-7), ParamType::Number).unwrap(), json!(-7));
        assert_eq!(validate(&json!("-7"), ParamType::Number).unwrap(), json!(-7));
    }

    #[test]
    fn boolean_coerces_literal_strings() {
        assert_eq!(
            validate(&json!("true"), ParamType::Boolean).unwrap(),
            json!(true)
        );
        assert_eq!(
            validate(&json!("false"), ParamType::Boolean).unwrap(),
            json!(false)
        );
        assert!(validate(&json!("yes"), ParamType::Boolean).is_err());
    }

    #[test]
    fn string_or_list_accepts_both() {
        assert!(validate(&json!("s"), ParamType::StringOrList).is_ok());
        assert!(validate(&json!([1, 2]), ParamType::StringOrList).is_ok());
        assert!(validate(&json!({"a": 1}), ParamType::StringOrList).is_err());
    }

    #[test]
    fn any_accepts_null() {
        assert_eq!(validate(&json!(null), ParamType::Any).unwrap(), json!(null));
    }

    #[test]
    fn mismatch_detail_names_both_types() {
        let detail = validate(&json!({"a": 1}), ParamType::List).unwrap_err();
        assert_eq!(detail, "expected list, got object");
    }
}
