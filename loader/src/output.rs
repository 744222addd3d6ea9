//! Output formatting for assembled parameters.

use rule_params_core::{Assembly, Parameter};
use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Formats a parameter list in the requested output format.
pub fn format_parameters(params: &[Parameter], format: OutputFormat, pretty: bool) -> Result<String> {
    render(params, format, pretty)
}

/// Formats an assembly (parameters plus dropped writes).
pub fn format_assembly(assembly: &Assembly, format: OutputFormat, pretty: bool) -> Result<String> {
    render(assembly, format, pretty)
}

/// Formats an assembly according to `config`.
///
/// With `with_report` unset only the parameter list is written.
pub fn format_output(assembly: &Assembly, config: &OutputConfig) -> Result<String> {
    if config.with_report {
        format_assembly(assembly, config.format, config.pretty)
    } else {
        format_parameters(&assembly.parameters, config.format, config.pretty)
    }
}

fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}
