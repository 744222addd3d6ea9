//! Loading, configuration, and output for rule-params.
//!
//! This crate wraps the assembler with the pieces a tool needs around it:
//! reading field declarations from JSON or YAML, a YAML configuration file,
//! and rendering the assembled parameters.
//!
//! # Quick start
//!
//! ```no_run
//! use rule_params_loader::{AssembleConfig, assemble_package, format_output, load_package};
//!
//! let config = AssembleConfig::load("rule-params.yml").unwrap();
//! let package = load_package("fields/orders.yml").unwrap();
//!
//! let assembly = assemble_package(&package, &config);
//! println!("{}", format_output(&assembly, &config.output).unwrap());
//! ```
//!
//! # Feature flags
//!
//! - **`clap`**: derives `clap::ValueEnum` for [`InputFormat`] and
//!   [`OutputFormat`] so they can be used directly as CLI arguments.

mod config;
mod error;
mod loader;
mod output;

use rule_params_core::{
    Assembly, DeclaredLeafResolver, FieldPackage, assemble_with_report, resolve_leaves,
};
use tracing::{info, warn};

pub use config::{AssembleConfig, CONFIG_VERSION, OutputConfig};
pub use error::{LoaderError, Result};
pub use loader::{InputFormat, load_package, parse_package, read_package};
pub use output::{OutputFormat, format_assembly, format_output, format_parameters};

/// Resolves and assembles a package using the configured default location.
///
/// Dropped writes are reported in the returned [`Assembly`] and summarized
/// with a `warn` log line.
///
/// # Examples
///
/// ```
/// use rule_params_core::{FieldPackage, LeafDeclaration, ParamLocation, SchemaType};
/// use rule_params_loader::{AssembleConfig, assemble_package};
///
/// let package = FieldPackage::new()
///     .with_field("user.id", LeafDeclaration::new(SchemaType::integer()));
/// let config = AssembleConfig {
///     default_location: ParamLocation::Path,
///     ..AssembleConfig::default()
/// };
///
/// let assembly = assemble_package(&package, &config);
/// assert_eq!(assembly.parameters[0].location, ParamLocation::Path);
/// ```
pub fn assemble_package(package: &FieldPackage, config: &AssembleConfig) -> Assembly {
    let resolver = DeclaredLeafResolver::new(config.default_location);
    let leaves = resolve_leaves(&resolver, &package.fields);
    let assembly = assemble_with_report(leaves);

    info!(
        package = package.name.as_deref().unwrap_or("<unnamed>"),
        fields = package.field_count(),
        parameters = assembly.parameters.len(),
        "Assembled field package"
    );
    if !assembly.dropped.is_empty() {
        warn!(
            dropped = assembly.dropped.len(),
            fields = ?assembly.dropped.iter().map(|d| d.field.as_str()).collect::<Vec<_>>(),
            "Fields conflicted with their container and were dropped"
        );
    }

    assembly
}
