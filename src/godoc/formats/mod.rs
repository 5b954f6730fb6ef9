//! Output formats for segmented documents
//!
//! `json` is the exchange format: a minified array of `{"Kind", "Lines"}` objects.
//! The others are conveniences for reading and debugging.
//!
//!     json         minified JSON (default)
//!     json-pretty  pretty printed JSON
//!     yaml         YAML sequence of the same objects
//!     tag          XML-like tags, one element per block and per line
//!     treeviz      one line per block

pub mod tag;
pub mod treeviz;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SerializeError;
use crate::godoc::ast::Document;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    Json,
    JsonPretty,
    Yaml,
    Tag,
    Treeviz,
}

impl Format {
    /// All formats, in the order they are listed to users
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::JsonPretty,
        Format::Yaml,
        Format::Tag,
        Format::Treeviz,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::JsonPretty => "json-pretty",
            Format::Yaml => "yaml",
            Format::Tag => "tag",
            Format::Treeviz => "treeviz",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::Json => "Minified JSON array of {Kind, Lines} objects",
            Format::JsonPretty => "Pretty printed JSON",
            Format::Yaml => "YAML sequence of {Kind, Lines} mappings",
            Format::Tag => "XML-like tag serialization",
            Format::Treeviz => "One line per block, for quick inspection",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A format name that matches none of [`Format::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}' (expected one of: json, json-pretty, yaml, tag, treeviz)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Serialize a document in the given format
pub fn serialize_document(doc: &Document, format: Format) -> Result<String, SerializeError> {
    let output = match format {
        Format::Json => serde_json::to_string(doc)?,
        Format::JsonPretty => serde_json::to_string_pretty(doc)?,
        Format::Yaml => serde_yaml::to_string(doc)?,
        Format::Tag => tag::serialize_document(doc),
        Format::Treeviz => treeviz::to_treeviz_str(doc),
    };
    Ok(output)
}
