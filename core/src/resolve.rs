//! Leaf resolution: one typed descriptor per flat field.
//!
//! Turning a raw rule into a typed schema happens outside this crate. The
//! [`LeafResolver`] trait is the seam: implement it for your rule
//! representation (closures work too) and hand it to
//! [`rules_to_parameters`]. [`DeclaredLeafResolver`] covers the common case
//! where declarations are already typed, such as fields loaded from a
//! [`FieldPackage`](crate::FieldPackage).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LeafDescriptor, LeafSet, ParamLocation, Parameter, SchemaType, assemble};

/// Produces the leaf descriptor of one flat field from its rule.
///
/// Called exactly once per field, in declaration order.
///
/// # Examples
///
/// ```
/// use rule_params_core::*;
///
/// // Any `Fn(&str, &R) -> LeafDescriptor` is a resolver.
/// let resolver = |name: &str, rule: &String| {
///     let schema = if rule.contains("integer") {
///         SchemaType::integer()
///     } else {
///         SchemaType::string()
///     };
///     LeafDescriptor {
///         name: name.to_string(),
///         location: ParamLocation::Query,
///         schema,
///         required: rule.contains("required"),
///     }
/// };
///
/// let leaf = resolver.resolve("page", &"required|integer".to_string());
/// assert_eq!(leaf.schema, SchemaType::integer());
/// assert!(leaf.required);
/// ```
pub trait LeafResolver<R> {
    /// Resolves the rule declared for `name`.
    fn resolve(&self, name: &str, rule: &R) -> LeafDescriptor;
}

impl<R, F> LeafResolver<R> for F
where
    F: Fn(&str, &R) -> LeafDescriptor,
{
    fn resolve(&self, name: &str, rule: &R) -> LeafDescriptor {
        self(name, rule)
    }
}

/// An already-typed field declaration.
///
/// The location is optional; [`DeclaredLeafResolver`] fills in its default
/// when it is missing.
///
/// # Examples
///
/// ```
/// use rule_params_core::{LeafDeclaration, ParamLocation, SchemaType};
///
/// let decl: LeafDeclaration = serde_json::from_str(
///     r#"{"schema": {"type": "integer"}, "required": true}"#,
/// ).unwrap();
/// assert_eq!(decl.location, None);
/// assert!(decl.required);
///
/// let header = LeafDeclaration::new(SchemaType::string())
///     .with_location(ParamLocation::Header)
///     .mark_required();
/// assert_eq!(header.location, Some(ParamLocation::Header));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafDeclaration {
    /// Where the field is carried, if declared.
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ParamLocation>,
    /// Typed schema of the field.
    pub schema: SchemaType,
    /// Whether the field must be present.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl LeafDeclaration {
    /// Creates an optional declaration without a location.
    pub fn new(schema: SchemaType) -> Self {
        Self {
            location: None,
            schema,
            required: false,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: ParamLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Marks the declaration as required.
    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Resolver for [`LeafDeclaration`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredLeafResolver {
    default_location: ParamLocation,
}

impl DeclaredLeafResolver {
    /// Creates a resolver that places undeclared locations at
    /// `default_location`.
    pub fn new(default_location: ParamLocation) -> Self {
        Self { default_location }
    }

    /// Location used for declarations without one.
    pub fn default_location(&self) -> ParamLocation {
        self.default_location
    }
}

impl LeafResolver<LeafDeclaration> for DeclaredLeafResolver {
    fn resolve(&self, name: &str, rule: &LeafDeclaration) -> LeafDescriptor {
        LeafDescriptor {
            name: name.to_string(),
            location: rule.location.unwrap_or(self.default_location),
            schema: rule.schema.clone(),
            required: rule.required,
        }
    }
}

/// Runs `resolver` once per field, keeping declaration order.
pub fn resolve_leaves<R>(resolver: &impl LeafResolver<R>, rules: &IndexMap<String, R>) -> LeafSet {
    rules
        .iter()
        .map(|(name, rule)| (name.clone(), resolver.resolve(name, rule)))
        .collect()
}

/// Resolves every rule and assembles the result into top-level parameters.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use rule_params_core::*;
///
/// let mut rules = IndexMap::new();
/// rules.insert("address.street".to_string(), LeafDeclaration::new(SchemaType::string()));
/// rules.insert(
///     "address.zip".to_string(),
///     LeafDeclaration::new(SchemaType::string()).mark_required(),
/// );
///
/// let params = rules_to_parameters(&DeclaredLeafResolver::default(), &rules);
/// assert_eq!(params.len(), 1);
/// let address = params[0].schema.as_object().unwrap();
/// assert_eq!(address.property_names(), vec!["street", "zip"]);
/// assert!(address.is_required("zip"));
/// ```
pub fn rules_to_parameters<R>(
    resolver: &impl LeafResolver<R>,
    rules: &IndexMap<String, R>,
) -> Vec<Parameter> {
    let leaves = resolve_leaves(resolver, rules);
    debug!(fields = leaves.len(), "Resolved leaf descriptors");
    assemble(leaves)
}
