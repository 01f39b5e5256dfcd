//! [`Value`] to text encoding for YAML and JSON.
//!
//! Mapping keys are written in the tree's insertion order. JSON output is
//! pretty-printed. Every encoded document ends with exactly one newline.

use crate::error::{Result, YmergeError};
use crate::format::Format;
use crate::types::Value;

/// Encode `value` as `format`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use ymerge_core::{encode, Format, Value};
///
/// let value = Value::from(json!({"port": 443}));
/// assert_eq!(encode(&value, Format::Json).unwrap(), "{\n  \"port\": 443\n}\n");
/// ```
pub fn encode(value: &Value, format: Format) -> Result<String> {
    tracing::trace!(%format, root = value.kind(), "encoding document");
    let mut out = match format {
        Format::Yaml => {
            serde_saphyr::to_string(value).map_err(|err| YmergeError::Encode(err.to_string()))?
        }
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    Ok(out)
}
