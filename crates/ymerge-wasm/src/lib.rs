//! WASM bindings for ymerge-core.
//!
//! Exposes document merging as `#[wasm_bindgen]` functions callable from
//! JavaScript/TypeScript. Inputs are read as YAML, which also accepts JSON.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p ymerge-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/ymerge-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/ymerge_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;
use ymerge_core::Format;

/// Merge `documents` left to right and return the result.
///
/// `output_format` is `"yaml"` (default) or `"json"`. Throws a JS error if
/// the list is empty, any document fails to parse, or the format is unknown.
#[wasm_bindgen]
pub fn merge(documents: Vec<String>, output_format: Option<String>) -> Result<String, JsValue> {
    let output = match output_format.as_deref() {
        Some(name) => name.parse::<Format>().map_err(to_js_error)?,
        None => Format::Yaml,
    };
    ymerge_core::merge_documents(documents.as_slice(), Format::Yaml, output).map_err(to_js_error)
}

/// Merge two JSON documents and return pretty-printed JSON.
///
/// Convenience for callers that only deal in JSON.
#[wasm_bindgen(js_name = mergeJson)]
pub fn merge_json(base: &str, overlay: &str) -> Result<String, JsValue> {
    ymerge_core::merge_documents(&[base, overlay], Format::Json, Format::Json).map_err(to_js_error)
}

fn to_js_error(err: ymerge_core::YmergeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
