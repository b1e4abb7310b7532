//! Per-field sanitizers for decoded token records.
//!
//! Each field of a token is cleaned against its own grammar. Identifier
//! grammars reject wholesale (the field becomes empty); file and path
//! grammars strip what they cannot accept.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::TokenError;

static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(_[a-z][a-z0-9_]*)?[a-z0-9]+$").expect("component grammar")
});

static AREA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*[a-z0-9]$").expect("area grammar"));

/// Characters never allowed in a file or path segment.
const FORBIDDEN_FILE_CHARS: &str = "&<>\"`|':\\/";

/// Frankenstyle component name, e.g. `mod_resource`, `user`, `course`.
pub fn clean_component(raw: &str) -> String {
    if !COMPONENT_RE.is_match(raw) || raw.contains("__") {
        return String::new();
    }
    // Activity modules are a single word after the prefix.
    if raw.starts_with("mod_") && raw.matches('_').count() != 1 {
        return String::new();
    }
    raw.to_string()
}

/// Storage area name, e.g. `content`, `intro`, `private`.
pub fn clean_area(raw: &str) -> String {
    if !AREA_RE.is_match(raw) || raw.contains("__") {
        return String::new();
    }
    raw.to_string()
}

fn strip_file_chars(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() && !FORBIDDEN_FILE_CHARS.contains(*c))
        .collect()
}

/// File name. `.` survives as the directory marker, `..` never does.
pub fn clean_file_name(raw: &str) -> String {
    let cleaned = strip_file_chars(raw);
    if cleaned == ".." {
        String::new()
    } else {
        cleaned
    }
}

/// Directory path such as `/`, `/pics/` or `/a/b/`.
pub fn clean_path(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let segments: Vec<String> = unified
        .split('/')
        .enumerate()
        .map(|(i, segment)| {
            if i == 0 && segment == "." {
                return segment.to_string();
            }
            let cleaned = strip_file_chars(segment);
            if cleaned == "." || cleaned == ".." {
                String::new()
            } else {
                cleaned
            }
        })
        .collect();
    let mut path = segments.join("/");
    while path.contains("//") {
        path = path.replace("//", "/");
    }
    while path.contains("/./") {
        path = path.replace("/./", "/");
    }
    path
}

/// Integer field; anything that does not parse becomes 0.
pub fn clean_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Context id: a non-negative integer or nothing.
pub fn clean_context_id(value: &Value) -> Result<u64, TokenError> {
    match value {
        Value::Number(n) => n.as_u64().ok_or(TokenError::Context),
        Value::String(s) => s.trim().parse().map_err(|_| TokenError::Context),
        _ => Err(TokenError::Context),
    }
}

/// Text of a scalar field, or `None` when it is absent or null.
pub fn scalar_text(field: &str, value: Option<&Value>) -> Result<Option<String>, TokenError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(TokenError::Record(format!("field '{}' is not a scalar", field))),
    }
}
