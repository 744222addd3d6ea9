//! Field package loading from JSON and YAML.
//!
//! Two document shapes are accepted:
//!
//! - a full [`FieldPackage`] (a document whose top-level `fields` key holds
//!   the declarations);
//! - a bare map of dotted field name to [`LeafDeclaration`]. A bare map may
//!   declare a field named `fields`; its value is then a declaration.
//!
//! Field order is taken from the document in both cases.
//!
//! ```
//! use rule_params_loader::{InputFormat, parse_package};
//!
//! let bare = r#"{
//!     "items.*.id": {"schema": {"type": "integer"}, "required": true},
//!     "items.*.name": {"schema": {"type": "string"}}
//! }"#;
//! let package = parse_package(bare, InputFormat::Json).unwrap();
//! assert_eq!(package.field_count(), 2);
//! assert!(package.name.is_none());
//! ```

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use rule_params_core::{FieldPackage, LeafDeclaration};
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::error::{LoaderError, Result};

/// Serialization format of a declarations document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Picks the format from a file extension (`json`, `yaml`, `yml`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_params_loader::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_path("fields.yml").unwrap(), InputFormat::Yaml);
    /// assert_eq!(InputFormat::from_path("fields.JSON").unwrap(), InputFormat::Json);
    /// assert!(InputFormat::from_path("fields.toml").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Keys a [`LeafDeclaration`] may carry.
const DECLARATION_KEYS: [&str; 3] = ["in", "schema", "required"];

/// Only used to decide which document shape to parse.
#[derive(Deserialize)]
struct ShapeProbe {
    fields: Option<IndexMap<String, IgnoredAny>>,
}

impl ShapeProbe {
    /// A `fields` value shaped like a declaration means the document is a
    /// bare map that declares a field named `fields`.
    fn is_package(&self) -> bool {
        match &self.fields {
            Some(fields) => {
                let declaration = fields.contains_key("schema")
                    && fields.keys().all(|key| DECLARATION_KEYS.contains(&key.as_str()));
                !declaration
            }
            None => false,
        }
    }
}

/// Parses a declarations document.
///
/// # Errors
///
/// Returns [`LoaderError::JsonError`] or [`LoaderError::YamlError`] when the
/// text does not match either document shape.
pub fn parse_package(text: &str, format: InputFormat) -> Result<FieldPackage> {
    let package = match format {
        InputFormat::Json => {
            let probe: ShapeProbe = serde_json::from_str(text)?;
            if probe.is_package() {
                serde_json::from_str(text)?
            } else {
                let fields: IndexMap<String, LeafDeclaration> = serde_json::from_str(text)?;
                bare_package(fields)
            }
        }
        InputFormat::Yaml => {
            let probe: ShapeProbe = serde_yaml::from_str(text)?;
            if probe.is_package() {
                serde_yaml::from_str(text)?
            } else {
                let fields: IndexMap<String, LeafDeclaration> = serde_yaml::from_str(text)?;
                bare_package(fields)
            }
        }
    };
    Ok(package)
}

/// Reads a whole declarations document from `reader`.
///
/// # Errors
///
/// Returns [`LoaderError::IoError`] if reading fails, otherwise see
/// [`parse_package`].
pub fn read_package(mut reader: impl Read, format: InputFormat) -> Result<FieldPackage> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_package(&text, format)
}

/// Loads a declarations file, picking the format from its extension.
///
/// # Errors
///
/// Returns [`LoaderError::UnsupportedFormat`] for unknown extensions,
/// [`LoaderError::IoError`] if the file cannot be read, otherwise see
/// [`parse_package`].
pub fn load_package(path: impl AsRef<Path>) -> Result<FieldPackage> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let package = parse_package(&text, format)?;
    debug!(
        path = %path.display(),
        fields = package.field_count(),
        "Loaded field package"
    );
    Ok(package)
}

fn bare_package(fields: IndexMap<String, LeafDeclaration>) -> FieldPackage {
    FieldPackage {
        fields,
        ..FieldPackage::new()
    }
}
