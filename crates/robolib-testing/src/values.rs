//! Argument value helpers shared by the fixture libraries.

use serde_json::{Map, Value};

use robolib_api::{KeywordError, KeywordResult, TypeRef, TypeSpec};

/// Argument by position, or by name when it was given as a named argument.
pub fn arg<'a>(
    args: &'a [Value],
    named: &'a Map<String, Value>,
    index: usize,
    name: &str,
) -> Option<&'a Value> {
    args.get(index).or_else(|| named.get(name))
}

/// Argument that must be present.
pub fn required<'a>(
    args: &'a [Value],
    named: &'a Map<String, Value>,
    index: usize,
    name: &str,
) -> KeywordResult<&'a Value> {
    arg(args, named, index, name)
        .ok_or_else(|| KeywordError::failure(format!("Argument '{}' is required.", name)))
}

/// Finite number from a JSON number or a numeric string.
pub fn number(value: &Value, name: &str) -> KeywordResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).ok_or_else(|| {
        KeywordError::failure(format!("Argument '{}' got value '{}' that cannot be converted to a number.", name, text(value)))
    })
}

/// Integer from a JSON integer or an integer string.
pub fn integer(value: &Value, name: &str) -> KeywordResult<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        KeywordError::failure(format!("Argument '{}' got value '{}' that cannot be converted to an integer.", name, text(value)))
    })
}

/// Number as JSON, integral values as integers.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

/// Name keyed type information from `(argument, type name)` pairs.
pub fn type_map(entries: &[(&str, &str)]) -> TypeSpec {
    TypeSpec::ByName(
        entries
            .iter()
            .map(|(name, ty)| (name.to_string(), TypeRef::named(*ty)))
            .collect(),
    )
}

/// Strings as they are, everything else as JSON text.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
