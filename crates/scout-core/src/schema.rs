//! Argument validation against a tool's declared parameter schema.
//!
//! Deliberately a subset of JSON Schema: `required`, `type` for
//! string/integer/number/boolean/array (with `items` type), `enum`, and
//! `minimum`/`maximum` bounds. That covers every constraint the built-in
//! tools declare. Fields not present in `properties` are tolerated.

use serde_json::Value;

use crate::error::ScoutError;

/// Validate `args` against a JSON-schema `parameters` object.
///
/// Returns [`ScoutError::InvalidToolArguments`] naming the offending field.
/// A call that fails here must never reach the tool itself.
pub fn validate_args(tool: &str, schema: &Value, args: &Value) -> Result<(), ScoutError> {
    let invalid = |reason: String| ScoutError::InvalidToolArguments {
        tool: tool.to_string(),
        reason,
    };

    let obj = args
        .as_object()
        .ok_or_else(|| invalid("arguments must be a JSON object".to_string()))?;

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if !obj.contains_key(field) {
                return Err(invalid(format!("missing required field '{field}'")));
            }
        }
    }

    if let Some(props) = schema.get("properties").and_then(Value::as_object) {
        for (field, value) in obj {
            if let Some(prop) = props.get(field) {
                check_field(field, prop, value).map_err(invalid)?;
            }
        }
    }

    Ok(())
}

fn check_field(field: &str, prop: &Value, value: &Value) -> Result<(), String> {
    if let Some(ty) = prop.get("type").and_then(Value::as_str) {
        check_type(field, ty, prop, value)?;
    }
    if let Some(allowed) = prop.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            return Err(format!(
                "field '{field}' must be one of {allowed:?}, got {value}"
            ));
        }
    }
    Ok(())
}

fn check_type(field: &str, ty: &str, prop: &Value, value: &Value) -> Result<(), String> {
    match ty {
        "string" => {
            if !value.is_string() {
                return Err(format!("field '{field}' must be a string"));
            }
        }
        "integer" => {
            let n = value
                .as_i64()
                .ok_or_else(|| format!("field '{field}' must be an integer"))?;
            check_bounds(field, n as f64, prop)?;
        }
        "number" => {
            let n = value
                .as_f64()
                .ok_or_else(|| format!("field '{field}' must be a number"))?;
            check_bounds(field, n, prop)?;
        }
        "boolean" => {
            if !value.is_boolean() {
                return Err(format!("field '{field}' must be a boolean"));
            }
        }
        "array" => {
            let items = value
                .as_array()
                .ok_or_else(|| format!("field '{field}' must be an array"))?;
            if let Some(item_ty) = prop
                .get("items")
                .and_then(|i| i.get("type"))
                .and_then(Value::as_str)
            {
                for (idx, item) in items.iter().enumerate() {
                    let ok = match item_ty {
                        "string" => item.is_string(),
                        "integer" => item.as_i64().is_some(),
                        "number" => item.is_number(),
                        "boolean" => item.is_boolean(),
                        _ => true,
                    };
                    if !ok {
                        return Err(format!(
                            "field '{field}[{idx}]' must be of type {item_ty}"
                        ));
                    }
                }
            }
        }
        // "object" and unknown types pass through untyped.
        _ => {}
    }
    Ok(())
}

fn check_bounds(field: &str, n: f64, prop: &Value) -> Result<(), String> {
    if let Some(min) = prop.get("minimum").and_then(Value::as_f64) {
        if n < min {
            return Err(format!("field '{field}' must be >= {min}, got {n}"));
        }
    }
    if let Some(max) = prop.get("maximum").and_then(Value::as_f64) {
        if n > max {
            return Err(format!("field '{field}' must be <= {max}, got {n}"));
        }
    }
    Ok(())
}
