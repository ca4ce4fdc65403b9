//! Primitive accessors over parsed JSON.
//!
//! None of these fail. A field which is absent, or whose value is JSON
//! `null`, yields the default given by the caller; a field whose JSON type
//! does not match the requested type also yields the default, since there is
//! no fallback that parses numbers or booleans out of strings. Decoders which
//! need a field to be present check for it themselves.

use {
    foldhash::HashMap,
    serde_json::{Map, Value},
};

/// Gets a field of an object node, treating `null` the same as absent.
#[must_use]
pub fn field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    node.get(name).filter(|value| !value.is_null())
}

/// Gets the textual form of a node.
///
/// Strings are returned as-is, numbers and booleans as their JSON text, and
/// `null` as [`None`]. Arrays and objects are returned as compact JSON.
#[must_use]
pub fn text_of(node: &Value) -> Option<String> {
    match node {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Gets a node as an integer.
///
/// Fractional numbers are truncated towards zero.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "integer fields are allowed to be written as floats"
)]
pub fn int_of(node: &Value) -> Option<i64> {
    node.as_i64().or_else(|| node.as_f64().map(|n| n as i64))
}

/// Gets a text field.
#[must_use]
pub fn get_text(node: &Value, name: &str) -> Option<String> {
    field(node, name).and_then(text_of)
}

/// Gets a text field, or `default` if it is absent.
#[must_use]
pub fn get_text_or(node: &Value, name: &str, default: &str) -> String {
    get_text(node, name).unwrap_or_else(|| default.to_owned())
}

/// Gets an integer field.
#[must_use]
pub fn get_int(node: &Value, name: &str) -> Option<i64> {
    field(node, name).and_then(int_of)
}

/// Gets an integer field, or `default` if it is absent.
#[must_use]
pub fn get_int_or(node: &Value, name: &str, default: i64) -> i64 {
    get_int(node, name).unwrap_or(default)
}

/// Gets a floating-point field.
#[must_use]
pub fn get_double(node: &Value, name: &str) -> Option<f64> {
    field(node, name).and_then(Value::as_f64)
}

/// Gets a floating-point field, or `default` if it is absent.
#[must_use]
pub fn get_double_or(node: &Value, name: &str, default: f64) -> f64 {
    get_double(node, name).unwrap_or(default)
}

/// Gets a boolean field.
#[must_use]
pub fn get_bool(node: &Value, name: &str) -> Option<bool> {
    field(node, name).and_then(Value::as_bool)
}

/// Gets a boolean field, or `default` if it is absent.
#[must_use]
pub fn get_bool_or(node: &Value, name: &str, default: bool) -> bool {
    get_bool(node, name).unwrap_or(default)
}

/// Splits a space-separated list, dropping blank tokens.
///
/// Order and duplicates are kept.
#[must_use]
pub fn space_separated(node: Option<&Value>) -> Vec<String> {
    node.and_then(text_of)
        .map(|text| {
            text.split(' ')
                .filter(|token| !token.trim().is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Gets the textual form of every element of an array node.
///
/// Null elements are skipped, and a node which is not an array yields an
/// empty list.
#[must_use]
pub fn string_array(node: Option<&Value>) -> Vec<String> {
    match node {
        Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    }
}

/// Gets a list of integers, accepting either a single number or an array of
/// numbers.
#[must_use]
pub fn int_array(node: Option<&Value>) -> Vec<i64> {
    match node {
        Some(Value::Array(items)) => items.iter().filter_map(int_of).collect(),
        Some(other) => int_of(other).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Gets the textual form of every value of an object node, keyed by field
/// name.
#[must_use]
pub fn string_map(node: Option<&Value>) -> HashMap<String, String> {
    node.and_then(Value::as_object)
        .map(|object| text_entries(object).collect())
        .unwrap_or_default()
}

/// Iterates the fields of an object in their natural order, pairing each key
/// with the textual form of its value. A null value becomes `"null"`.
pub fn text_entries(object: &Map<String, Value>) -> impl Iterator<Item = (String, String)> + '_ {
    object.iter().map(|(key, value)| {
        let text = text_of(value).unwrap_or_else(|| value.to_string());
        (key.clone(), text)
    })
}
