use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::InterfaceConfig;

/// Errors that can occur while parsing a diagnostics dump into
/// [`InterfaceConfig`] records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was not valid JSON or a record had the wrong field types.
    #[error("failed to parse diagnostics JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read input file.
    #[error("failed to read diagnostics file: {0}")]
    Io(#[from] std::io::Error),
    /// Input decoded but does not have the expected shape.
    #[error("malformed diagnostics dump: {0}")]
    Malformed(String),
}

/// Parse diagnostics JSON bytes into interface records keyed by device name.
///
/// Accepts the bare device-name map as well as the single-key envelope some
/// releases emit around it.
pub fn parse(json: &[u8]) -> Result<BTreeMap<String, InterfaceConfig>, ParseError> {
    let value: Value = serde_json::from_slice(json)?;
    let Value::Object(map) = value else {
        return Err(ParseError::Malformed(
            "top-level value is not an object".to_string(),
        ));
    };

    let map = unwrap_envelope(map);
    let mut out = BTreeMap::new();
    for (device, record) in map {
        if !record.is_object() {
            return Err(ParseError::Malformed(format!(
                "entry '{device}' is not an object"
            )));
        }
        out.insert(device, serde_json::from_value(record)?);
    }
    Ok(out)
}

/// Read and parse a diagnostics dump file.
pub fn parse_file(path: &Path) -> Result<BTreeMap<String, InterfaceConfig>, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Strip a single-key wrapper object when its value is itself a non-empty
/// map of objects. A bare single-interface map is left alone because its
/// only value holds scalars and arrays, not nested objects.
fn unwrap_envelope(map: Map<String, Value>) -> Map<String, Value> {
    if map.len() != 1 {
        return map;
    }
    let inner = match map.values().next() {
        Some(Value::Object(inner)) if !inner.is_empty() => inner,
        _ => return map,
    };
    if inner.values().all(Value::is_object) {
        return inner.clone();
    }
    map
}
