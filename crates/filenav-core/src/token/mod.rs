//! Opaque tokens: how the picker holds on to a place in the hierarchy.
//!
//! A token is a versioned JSON record of a [`NodeLocator`], encoded with the
//! URL-safe base64 alphabet so it can travel in a query string untouched.
//! Decoding never trusts the record: every field goes through its own
//! sanitizer in [`sanitize`].

pub mod sanitize;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value, json};

use crate::error::TokenError;
use crate::hierarchy::NodeLocator;

/// Version tag written into every token record.
pub const TOKEN_VERSION: u64 = 1;

/// Encode a locator as an opaque token.
pub fn encode(locator: &NodeLocator) -> String {
    let record = json!({
        "v": TOKEN_VERSION,
        "contextid": locator.context_id,
        "component": locator.component,
        "filearea": locator.area,
        "itemid": locator.item_id,
        "filepath": locator.path,
        "filename": locator.name,
    });
    URL_SAFE_NO_PAD.encode(record.to_string())
}

/// Decode a token back into a sanitized locator.
pub fn decode(token: &str) -> Result<NodeLocator, TokenError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Record(format!("not JSON: {}", e)))?;
    let Value::Object(record) = value else {
        return Err(TokenError::Record("not an object".to_string()));
    };

    match record.get("v").and_then(Value::as_u64) {
        Some(TOKEN_VERSION) => {}
        other => {
            return Err(TokenError::Record(format!(
                "unsupported version {:?}",
                other
            )));
        }
    }

    let context_id = record
        .get("contextid")
        .ok_or(TokenError::Context)
        .and_then(sanitize::clean_context_id)?;

    Ok(NodeLocator {
        context_id,
        component: text_field(&record, "component")?.map(|s| sanitize::clean_component(&s)),
        area: text_field(&record, "filearea")?.map(|s| sanitize::clean_area(&s)),
        item_id: match record.get("itemid") {
            None | Some(Value::Null) => None,
            Some(v) => Some(sanitize::clean_int(v)),
        },
        path: text_field(&record, "filepath")?.map(|s| sanitize::clean_path(&s)),
        name: text_field(&record, "filename")?.map(|s| sanitize::clean_file_name(&s)),
    })
}

fn text_field(record: &Map<String, Value>, field: &str) -> Result<Option<String>, TokenError> {
    sanitize::scalar_text(field, record.get(field))
}
