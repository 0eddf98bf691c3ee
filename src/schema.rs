//! Typed view of the enums schema document.
//!
//! The input is a JSON Schema fragment: an optional `title` plus a `$defs`
//! mapping of name → definition. Each definition is one of three shapes,
//! decided by key presence with strict precedence (`enum` beats `pattern`
//! beats the plain `type` fallback).

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::DocError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Deserialize)]
pub struct SchemaDocument {
    /// Page title; defaults to "Enumerations" when absent.
    #[serde(default)]
    title: Option<String>,

    /// Named definitions. Source order is preserved by the map but display
    /// order always comes from [`SchemaDocument::sorted_names`].
    #[serde(rename = "$defs", default)]
    pub defs: IndexMap<String, Definition>,
}

/// One `$defs` entry. Unknown sibling keys are ignored rather than
/// rejected, so real-world schemas with extra vocabulary still render.
#[derive(Debug, Deserialize)]
pub struct Definition {
    #[serde(default)]
    description: Option<String>,

    #[serde(rename = "enum", default)]
    enum_: Option<Vec<Value>>,

    #[serde(default)]
    pattern: Option<String>,

    #[serde(rename = "type", default)]
    type_: Option<String>,
}

/// Render discriminant for a definition.
#[derive(Debug)]
pub enum Shape<'a> {
    /// Ordered scalar values, rendered as a chip list.
    Enum(&'a [Value]),
    /// A regular-expression pattern, rendered as a monospace fragment.
    Pattern(&'a str),
    /// Fallback: just a type label (or "unknown").
    Plain(&'a str),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SchemaDocument {
    /// Load and parse the schema document at `path`.
    pub fn load(path: &Path) -> Result<Self, DocError> {
        if !path.exists() {
            return Err(DocError::InputNotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path).map_err(|source| DocError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&source)
    }

    /// Parse from JSON text, with JSON-path context in error messages.
    pub fn from_str(source: &str) -> Result<Self, DocError> {
        let de = &mut serde_json::Deserializer::from_str(source);
        match serde_path_to_error::deserialize::<_, Self>(de) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                let path = err.path().to_string();
                Err(DocError::InputParse(format!(
                    "at JSON path {path} → {}",
                    err.into_inner()
                )))
            }
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Enumerations")
    }

    /// Definition names in byte-wise ascending order. Names are unique map
    /// keys, so the order is total and deterministic.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.defs.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

impl Definition {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Pick the render path. Precedence is fixed: a definition carrying
    /// both `enum` and `pattern` renders as an enum, never as a pattern.
    pub fn shape(&self) -> Shape<'_> {
        if let Some(values) = &self.enum_ {
            Shape::Enum(values)
        } else if let Some(pattern) = &self.pattern {
            Shape::Pattern(pattern)
        } else {
            Shape::Plain(self.type_.as_deref().unwrap_or("unknown"))
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
