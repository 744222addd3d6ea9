//! Assembler configuration.
//!
//! Defines the YAML-serializable configuration that controls where
//! undeclared fields are placed and how assembled parameters are rendered.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! default_location: query
//! output:
//!   format: json
//!   pretty: true
//!   with_report: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use rule_params_core::ParamLocation;
use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, Result};
use crate::output::OutputFormat;

/// Current configuration format version.
pub const CONFIG_VERSION: &str = "1.0";

/// Settings controlling how results are written.
///
/// # Examples
///
/// ```
/// # use rule_params_loader::{OutputConfig, OutputFormat};
/// let output = OutputConfig::default();
/// assert!(matches!(output.format, OutputFormat::Json));
/// assert!(output.pretty);
/// assert!(!output.with_report);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Serialization format of the result document.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Emit `{ parameters, dropped }` instead of the bare parameter list.
    pub with_report: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
            with_report: false,
        }
    }
}

/// Top-level assembler configuration.
///
/// Loaded from a YAML file (typically `rule-params.yml` next to the field
/// declarations). Every section may be omitted.
///
/// # Examples
///
/// ```no_run
/// use rule_params_loader::AssembleConfig;
///
/// let config = AssembleConfig::load("rule-params.yml").unwrap();
/// println!("undeclared fields go to {}", config.default_location);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Location assigned to declarations without an `in` key.
    pub default_location: ParamLocation,
    /// Output settings.
    pub output: OutputConfig,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            default_location: ParamLocation::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AssembleConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::LoaderError::IoError) if the file cannot
    /// be read, [`YamlError`](crate::LoaderError::YamlError) if parsing
    /// fails, or [`InvalidConfig`](crate::LoaderError::InvalidConfig) if
    /// validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::LoaderError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::LoaderError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks values that serde cannot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rule_params_loader::AssembleConfig;
    /// let mut config = AssembleConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.version = "  ".into();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(LoaderError::InvalidConfig(
                "version cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
