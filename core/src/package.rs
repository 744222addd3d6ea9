use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{LeafDeclaration, LeafResolver, Parameter, rules_to_parameters};

/// Serializable bundle of field declarations for one request.
///
/// A package keeps the flat dotted declarations in document order, making it
/// suitable for storing next to the rule source and feeding to the assembler
/// in one step.
///
/// # Examples
///
/// ```
/// use rule_params_core::*;
///
/// let package = FieldPackage::new()
///     .with_field("items.*.id", LeafDeclaration::new(SchemaType::integer()).mark_required())
///     .with_field("items.*.name", LeafDeclaration::new(SchemaType::string()));
///
/// assert_eq!(package.field_count(), 2);
///
/// let params = package.to_parameters(&DeclaredLeafResolver::default());
/// assert_eq!(params.len(), 1);
/// assert_eq!(params[0].name, "items");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPackage {
    /// Field contract version (populated from
    /// [`FIELD_CONTRACT_VERSION`](crate::FIELD_CONTRACT_VERSION)).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Optional package name (e.g. the request class or route).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional package description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declarations keyed by dotted field name, in document order.
    #[serde(default)]
    pub fields: IndexMap<String, LeafDeclaration>,
}

impl FieldPackage {
    /// Creates an empty package.
    ///
    /// The `schema_version` is automatically set from
    /// [`FIELD_CONTRACT_VERSION`](crate::FIELD_CONTRACT_VERSION).
    pub fn new() -> Self {
        Self {
            schema_version: Some(crate::FIELD_CONTRACT_VERSION.to_string()),
            ..Default::default()
        }
    }

    /// Adds or replaces a declaration.
    pub fn with_field(mut self, key: &str, declaration: LeafDeclaration) -> Self {
        self.fields.insert(key.to_string(), declaration);
        self
    }

    /// Returns the number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Resolves and assembles every field of the package.
    pub fn to_parameters(&self, resolver: &impl LeafResolver<LeafDeclaration>) -> Vec<Parameter> {
        rules_to_parameters(resolver, &self.fields)
    }
}
