//! Supported serialization formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::YmergeError;

/// A text format documents can be decoded from and encoded to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// YAML 1.2. Also accepts JSON input, since JSON is a subset.
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Pick a format from a file extension: `.json` is JSON, anything else
    /// (including no extension) is read as YAML.
    ///
    /// ```
    /// use ymerge_core::Format;
    ///
    /// assert_eq!(Format::from_path("values.json"), Format::Json);
    /// assert_eq!(Format::from_path("values.yml"), Format::Yaml);
    /// assert_eq!(Format::from_path("Makefile"), Format::Yaml);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = YmergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(YmergeError::UnknownFormat(s.to_string())),
        }
    }
}
