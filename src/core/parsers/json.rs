use std::{fs, path::Path};

use serde_json::Value;

use crate::{
    core::KeySet,
    error::{FinderError, FinderResult},
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load the key universe from a JSON dictionary file.
///
/// Only the top-level property names are kept; values may be anything and
/// are never inspected.
///
/// # Errors
///
/// - [`FinderError::NotFound`] if the file does not exist or cannot be read
/// - [`FinderError::Parse`] if the content is not UTF-8 JSON or its top
///   level is not an object
pub fn parse_key_file(path: &Path) -> FinderResult<KeySet> {
    let bytes = fs::read(path).map_err(|e| FinderError::not_found(path, e))?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let content =
        std::str::from_utf8(bytes).map_err(|e| FinderError::parse(path, e.to_string()))?;
    let keys = parse_keys(content).map_err(|message| FinderError::parse(path, message))?;

    Ok(KeySet::new(path, keys))
}

/// Extract the top-level property names of a JSON object, in file order.
fn parse_keys(content: &str) -> Result<Vec<String>, String> {
    let json: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    match json {
        Value::Object(map) => Ok(map.into_iter().map(|(key, _)| key).collect()),
        other => Err(format!(
            "expected an object at the top level, found {}",
            value_kind(&other)
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
