//! String-in, string-out merging for callers that never touch a [`Value`].
//!
//! This is what the WASM and Python bindings expose. The CLI drives the same
//! steps itself so it can name files in its diagnostics.

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::{Result, YmergeError};
use crate::format::Format;
use crate::merge::merge;
use crate::types::Value;

/// Decode every document as `input`, fold them left to right and encode the
/// result as `output`.
///
/// Decoding stops at the first malformed document. The error wraps the
/// parser's message in [`YmergeError::Document`] with that document's index.
///
/// # Errors
///
/// Returns [`YmergeError::NoDocuments`] for an empty slice, a
/// [`YmergeError::Document`] when any input fails to decode, and an encoding
/// error if the result cannot be written as `output`.
///
/// # Examples
///
/// ```
/// use ymerge_core::{merge_documents, Format};
///
/// let out = merge_documents(
///     &["a: 1\nlist: [1, 2, 3]\n", "list: [9, 8]\n"],
///     Format::Yaml,
///     Format::Json,
/// )
/// .unwrap();
/// let value: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(value, serde_json::json!({"a": 1, "list": [9, 8, 3]}));
/// ```
pub fn merge_documents<S: AsRef<str>>(
    documents: &[S],
    input: Format,
    output: Format,
) -> Result<String> {
    tracing::debug!(documents = documents.len(), %input, %output, "merging documents");
    let mut acc: Option<Value> = None;
    for (index, document) in documents.iter().enumerate() {
        let value = decode(document.as_ref(), input).map_err(|err| YmergeError::Document {
            index,
            source: Box::new(err),
        })?;
        acc = Some(match acc {
            Some(base) => merge(base, value),
            None => value,
        });
    }
    let merged = acc.ok_or(YmergeError::NoDocuments)?;
    encode(&merged, output)
}
