use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::{Error, ParseError};
use crate::model::RawCut;

/// Location of the cut object inside a forge broadcast/return file.
const CUT_POINTER: &str = "/returns/cut";
const VALUE_POINTER: &str = "/returns/cut/value";

/// Read `path` and extract its `returns.cut` object.
pub fn load(path: &Path) -> Result<RawCut, Error> {
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), bytes = json.len(), "input loaded");

    Ok(load_from_json(&json)?)
}

/// Parse the input JSON string into `RawCut`.
///
/// The file is expected to look like
/// `{ "returns": { "cut": { "value": "[(...), ...]" } } }`;
/// `internalType` next to `value` is optional.
pub fn load_from_json(json: &str) -> Result<RawCut, ParseError> {
    // Grab the entire file as a dynamic value first.
    let root: Value = serde_json::from_str(json)?;

    let cut = root
        .pointer(CUT_POINTER)
        .filter(|v| v.is_object())
        .ok_or(ParseError::MissingField {
            pointer: CUT_POINTER,
        })?;

    if !cut.get("value").is_some_and(Value::is_string) {
        return Err(ParseError::MissingField {
            pointer: VALUE_POINTER,
        });
    }

    Ok(RawCut::deserialize(cut)?)
}
