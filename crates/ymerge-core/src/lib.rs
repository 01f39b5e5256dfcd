//! # ymerge-core
//!
//! Deep merge for YAML and JSON documents, where every later document
//! overrides the ones before it.
//!
//! Documents are decoded into a format-agnostic [`Value`] tree, folded left
//! to right with [`merge()`], and encoded back to text. Mappings merge key by
//! key, sequences merge **by position**, and any other combination lets the
//! override win.
//!
//! ## Quick start
//!
//! ```rust
//! use ymerge_core::{decode, encode, merge, Format};
//!
//! let base = decode("server:\n  port: 80\n  flags: [a, b]\n", Format::Yaml).unwrap();
//! let patch = decode(r#"{"server": {"flags": ["x"]}}"#, Format::Json).unwrap();
//!
//! let merged = merge(base, patch);
//! assert_eq!(
//!     encode(&merged, Format::Json).unwrap(),
//!     "{\n  \"server\": {\n    \"port\": 80,\n    \"flags\": [\n      \"x\",\n      \"b\"\n    ]\n  }\n}\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`mod@merge`] — the override merge and its left fold
//! - [`decoder`] — YAML/JSON text → `Value`
//! - [`encoder`] — `Value` → YAML/JSON text
//! - [`pipeline`] — decode, fold and encode a list of strings in one call
//! - [`format`] — the supported formats
//! - [`error`] — error types for decode/encode failures
//! - [`types`] — the `Value` tree

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod merge;
pub mod pipeline;
pub mod types;

pub use decoder::decode;
pub use encoder::encode;
pub use error::{Result, YmergeError};
pub use format::Format;
pub use merge::{merge, merge_all};
pub use pipeline::merge_documents;
pub use types::{Mapping, Scalar, Value};
