//! # ymerge-python
//!
//! Python bindings for ymerge-core, built with PyO3.
//!
//! Exposes the following functions to Python as the `ymerge` module:
//!
//! - `merge(documents, output_format="yaml", input_format="yaml")` -- merge a
//!   list of document strings left to right
//! - `merge_json(base, overlay)` -- merge two JSON strings into JSON

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use ymerge_core::{Format, YmergeError};

fn to_py_error(err: YmergeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Merge documents left to right; later documents override earlier ones.
///
/// Args:
///     documents: Document strings, lowest priority first.
///     output_format: "yaml" or "json".
///     input_format: "yaml" (also accepts JSON) or "json".
///
/// Returns:
///     The merged document as a string.
///
/// Raises:
///     ValueError: If the list is empty, a document fails to parse, or a
///         format name is unknown.
#[pyfunction]
#[pyo3(signature = (documents, output_format="yaml", input_format="yaml"))]
fn merge(documents: Vec<String>, output_format: &str, input_format: &str) -> PyResult<String> {
    let output: Format = output_format.parse().map_err(to_py_error)?;
    let input: Format = input_format.parse().map_err(to_py_error)?;
    ymerge_core::merge_documents(documents.as_slice(), input, output).map_err(to_py_error)
}

/// Merge two JSON strings and return pretty-printed JSON.
///
/// Raises:
///     ValueError: If either input is not valid JSON.
#[pyfunction]
fn merge_json(base: &str, overlay: &str) -> PyResult<String> {
    ymerge_core::merge_documents(&[base, overlay], Format::Json, Format::Json)
        .map_err(to_py_error)
}

/// The `ymerge` Python module, implemented in Rust via PyO3.
#[pymodule]
fn ymerge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(merge, m)?)?;
    m.add_function(wrap_pyfunction!(merge_json, m)?)?;
    Ok(())
}
