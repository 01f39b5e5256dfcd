//! Text to [`Value`] decoding for YAML and JSON.
//!
//! Both formats go through the same [`Deserialize`](serde::Deserialize) impl
//! on `Value`, so duplicate mapping keys are rejected identically.
//!
//! An empty document is not an error. Input that holds nothing but
//! whitespace (plus comments and document markers for YAML), as well as an
//! explicit top-level `null`, decodes to an empty mapping. Merging that
//! mapping over anything leaves mappings unchanged.
//!
//! YAML's special floats `.inf`, `-.inf` and `.nan` are kept as text. The
//! parser hands them over as plain strings, indistinguishable from a quoted
//! `".inf"`, and JSON output has no way to spell them as numbers anyway.

use serde_saphyr::Options;

use crate::error::{Result, YmergeError};
use crate::format::Format;
use crate::types::Value;

/// Decode `input` as `format`.
///
/// # Examples
///
/// ```
/// use ymerge_core::{decode, Format, Value};
///
/// let value = decode("name: web\nreplicas: 2\n", Format::Yaml).unwrap();
/// assert_eq!(value.get("replicas"), Some(&Value::from(2)));
///
/// let empty = decode("# nothing here\n", Format::Yaml).unwrap();
/// assert_eq!(empty, Value::empty_mapping());
/// ```
pub fn decode(input: &str, format: Format) -> Result<Value> {
    tracing::trace!(%format, bytes = input.len(), "decoding document");
    if is_blank(input, format) {
        tracing::debug!(%format, "empty document, treating as empty mapping");
        return Ok(Value::empty_mapping());
    }

    let value = match format {
        Format::Yaml => decode_yaml(input)?,
        Format::Json => decode_json(input)?,
    };

    Ok(match value {
        Value::Null => Value::empty_mapping(),
        other => other,
    })
}

/// Parse YAML with strict booleans, so `yes`/`no`/`on`/`off` stay strings.
fn decode_yaml(input: &str) -> Result<Value> {
    serde_saphyr::from_str_with_options(
        input,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|err| YmergeError::Yaml(err.to_string()))
}

fn decode_json(input: &str) -> Result<Value> {
    Ok(serde_json::from_str(input)?)
}

/// True when the input has no content a parser would turn into a node.
fn is_blank(input: &str, format: Format) -> bool {
    match format {
        Format::Json => input.trim().is_empty(),
        Format::Yaml => input.lines().map(str::trim).all(|line| {
            line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
        }),
    }
}
