//! Schema type definitions for parameter trees.
//!
//! This module defines the data model shared by the resolver and the
//! assembler: scalar and container schema types, parameter locations, the
//! leaf descriptors produced per flat field, and the parameters handed back to
//! the caller. The types are designed for serialization with [`serde`] and
//! use an OpenAPI-flavoured shape (`{"type": "array", "items": ...}`).

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Version of the field declaration contract (semver).
///
/// Embedded in every [`FieldPackage`](crate::FieldPackage) to track
/// compatibility across releases.
pub const FIELD_CONTRACT_VERSION: &str = "1.0.0";

/// Where a parameter is carried in a request.
///
/// # Examples
///
/// ```
/// use rule_params_core::ParamLocation;
///
/// assert_eq!(ParamLocation::default(), ParamLocation::Query);
/// assert_eq!(ParamLocation::Header.as_str(), "header");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Query string (the default).
    #[default]
    Query,
    /// Path template segment.
    Path,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

impl ParamLocation {
    /// Returns the lowercase wire name of the location.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a [`SchemaType`], used in logs and conflict reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        };
        f.write_str(name)
    }
}

/// Annotations carried by scalar schema types.
///
/// Every field is optional; a bare scalar serializes as just its `type` tag.
///
/// # Examples
///
/// ```
/// use rule_params_core::ScalarType;
///
/// let email = ScalarType::default()
///     .with_format("email")
///     .with_description("Contact address");
/// assert_eq!(email.format.as_deref(), Some("email"));
/// assert!(!email.nullable);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalarType {
    /// Format hint (e.g., `email`, `date-time`, `uuid`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values, when the rule restricts them.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,
    /// Whether `null` is accepted.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl ScalarType {
    /// Sets the format hint.
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Restricts the scalar to the given values.
    pub fn with_enum(mut self, values: impl IntoIterator<Item = serde_json::Value>) -> Self {
        self.enum_values = values.into_iter().collect();
        self
    }

    /// Marks the scalar as nullable.
    pub fn allow_null(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Object container: named properties plus the set of required names.
///
/// Property order is insertion order. Overwriting an existing property keeps
/// its original position.
///
/// # Examples
///
/// ```
/// use rule_params_core::{ObjectType, SchemaType};
///
/// let mut address = ObjectType::new()
///     .with_property("street", SchemaType::string())
///     .with_property("zip", SchemaType::string());
/// address.add_required("zip");
/// address.add_required("zip");
///
/// assert_eq!(address.property_names(), vec!["street", "zip"]);
/// assert!(address.is_required("zip"));
/// assert_eq!(address.required.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectType {
    /// Properties keyed by name, in insertion order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaType>,
    /// Names of required properties, in the order they were first marked.
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub required: IndexSet<String>,
}

impl ObjectType {
    /// Creates an empty object type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property (builder form of [`add_property`](Self::add_property)).
    pub fn with_property(mut self, name: &str, schema: SchemaType) -> Self {
        self.add_property(name, schema);
        self
    }

    /// Inserts or overwrites a property.
    pub fn add_property(&mut self, name: &str, schema: SchemaType) {
        self.properties.insert(name.to_string(), schema);
    }

    /// Marks a property as required. Marking twice is a no-op.
    pub fn add_required(&mut self, name: &str) {
        self.required.insert(name.to_string());
    }

    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaType> {
        self.properties.get(name)
    }

    /// Returns `true` if the property name is in the required set.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Gets all property names in order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }
}

/// Array container with a single `items` schema shared by every index.
///
/// `items` stays `None` until some declaration contributes to it.
///
/// # Examples
///
/// ```
/// use rule_params_core::{ArrayType, SchemaType};
///
/// let empty = ArrayType::new();
/// assert!(empty.items.is_none());
///
/// let tags = ArrayType::of(SchemaType::string());
/// assert_eq!(tags.items.as_deref(), Some(&SchemaType::string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayType {
    /// Schema of every element, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaType>>,
}

impl ArrayType {
    /// Creates an array type with unset items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array type whose elements follow `items`.
    pub fn of(items: SchemaType) -> Self {
        Self {
            items: Some(Box::new(items)),
        }
    }
}

/// A node of the schema tree.
///
/// Scalars are leaves; [`Object`](SchemaType::Object) and
/// [`Array`](SchemaType::Array) are containers. Serialized with an internal
/// `type` tag so the JSON reads like an OpenAPI schema object.
///
/// # Examples
///
/// ```
/// use rule_params_core::{ArrayType, SchemaKind, SchemaType};
///
/// let ids = SchemaType::Array(ArrayType::of(SchemaType::integer()));
/// assert_eq!(ids.kind(), SchemaKind::Array);
///
/// let json = serde_json::to_value(&ids).unwrap();
/// assert_eq!(json, serde_json::json!({"type": "array", "items": {"type": "integer"}}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaType {
    String(ScalarType),
    Integer(ScalarType),
    Number(ScalarType),
    Boolean(ScalarType),
    Object(ObjectType),
    Array(ArrayType),
}

impl SchemaType {
    /// Bare string scalar.
    pub fn string() -> Self {
        Self::String(ScalarType::default())
    }

    /// Bare integer scalar.
    pub fn integer() -> Self {
        Self::Integer(ScalarType::default())
    }

    /// Bare number scalar.
    pub fn number() -> Self {
        Self::Number(ScalarType::default())
    }

    /// Bare boolean scalar.
    pub fn boolean() -> Self {
        Self::Boolean(ScalarType::default())
    }

    /// Empty object container.
    pub fn object() -> Self {
        Self::Object(ObjectType::new())
    }

    /// Array container with unset items.
    pub fn array() -> Self {
        Self::Array(ArrayType::new())
    }

    /// Returns the variant discriminant.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::String(_) => SchemaKind::String,
            Self::Integer(_) => SchemaKind::Integer,
            Self::Number(_) => SchemaKind::Number,
            Self::Boolean(_) => SchemaKind::Boolean,
            Self::Object(_) => SchemaKind::Object,
            Self::Array(_) => SchemaKind::Array,
        }
    }

    /// Returns `true` for an object with at least one property or an array
    /// whose items are set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_params_core::{ArrayType, SchemaType};
    ///
    /// assert!(!SchemaType::array().has_children());
    /// assert!(SchemaType::Array(ArrayType::of(SchemaType::string())).has_children());
    /// assert!(!SchemaType::string().has_children());
    /// ```
    pub fn has_children(&self) -> bool {
        match self {
            Self::Object(object) => !object.properties.is_empty(),
            Self::Array(array) => array.items.is_some(),
            _ => false,
        }
    }

    /// Returns the object payload, if this is an object.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the array payload, if this is an array.
    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Replaces this node with an empty object unless it already is one,
    /// then returns the object payload.
    pub fn make_object(&mut self) -> &mut ObjectType {
        match self {
            Self::Object(object) => object,
            node => {
                *node = Self::object();
                node.make_object()
            }
        }
    }

    /// Replaces this node with an empty array unless it already is one,
    /// then returns the array payload.
    pub fn make_array(&mut self) -> &mut ArrayType {
        match self {
            Self::Array(array) => array,
            node => {
                *node = Self::array();
                node.make_array()
            }
        }
    }
}

/// Typed schema for one flat field, as produced by a
/// [`LeafResolver`](crate::LeafResolver).
///
/// `name` is the full dotted key (e.g. `items.*.id`).
///
/// # Examples
///
/// ```
/// use rule_params_core::{LeafDescriptor, ParamLocation, SchemaType};
///
/// let id = LeafDescriptor::required("items.*.id", ParamLocation::Query, SchemaType::integer());
/// assert!(id.required);
///
/// let note = LeafDescriptor::optional("note", ParamLocation::Query, SchemaType::string());
/// assert!(!note.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafDescriptor {
    /// Full dotted field name.
    pub name: String,
    /// Where the field is carried.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Already-typed schema of the field.
    pub schema: SchemaType,
    /// Whether the field must be present.
    #[serde(default)]
    pub required: bool,
}

impl LeafDescriptor {
    /// Creates a required leaf.
    pub fn required(name: &str, location: ParamLocation, schema: SchemaType) -> Self {
        Self {
            name: name.to_string(),
            location,
            schema,
            required: true,
        }
    }

    /// Creates an optional leaf.
    pub fn optional(name: &str, location: ParamLocation, schema: SchemaType) -> Self {
        Self {
            name: name.to_string(),
            location,
            schema,
            required: false,
        }
    }
}

/// A top-level parameter handed to the document-assembly collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Top-level field name (never dotted for assembled groups).
    pub name: String,
    /// Where the parameter is carried.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Schema tree of the parameter.
    pub schema: SchemaType,
    /// Whether the parameter must be present.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl Parameter {
    /// Creates an optional parameter.
    pub fn new(name: &str, location: ParamLocation, schema: SchemaType) -> Self {
        Self {
            name: name.to_string(),
            location,
            schema,
            required: false,
        }
    }
}

impl From<LeafDescriptor> for Parameter {
    fn from(leaf: LeafDescriptor) -> Self {
        Self {
            name: leaf.name,
            location: leaf.location,
            schema: leaf.schema,
            required: leaf.required,
        }
    }
}
