//! Core types and tree assembly for rule-derived API parameters.
//!
//! Validation rules are declared against flat, dot-addressed field names
//! (`address.street`, `items.*.id`, `items.*`). This crate rebuilds the nested
//! structure those names describe:
//!
//! - [`SchemaType`]: scalar, object, and array schema nodes.
//! - [`LeafDescriptor`]: the typed schema of one flat field.
//! - [`Parameter`]: a top-level parameter with its assembled schema tree.
//! - [`FieldPackage`]: a serializable bundle of typed declarations.
//!
//! Assembly ([`assemble`], [`assemble_with_report`]) groups fields by their
//! first segment and deep-sets every nested leaf into one tree per group.
//! Resolution ([`LeafResolver`], [`rules_to_parameters`]) is the seam where a
//! rule representation is turned into leaf descriptors.
//!
//! # Example
//!
//! ```
//! use rule_params_core::*;
//!
//! let package = FieldPackage::new()
//!     .with_field("filter", LeafDeclaration::new(SchemaType::object()).mark_required())
//!     .with_field("filter.status", LeafDeclaration::new(SchemaType::string()))
//!     .with_field("filter.tags.*", LeafDeclaration::new(SchemaType::string()))
//!     .with_field("page", LeafDeclaration::new(SchemaType::integer()));
//!
//! let params = package.to_parameters(&DeclaredLeafResolver::default());
//! assert_eq!(params.len(), 2);
//!
//! let filter = params[0].schema.as_object().unwrap();
//! assert_eq!(filter.property_names(), vec!["status", "tags"]);
//! assert_eq!(
//!     filter.property("tags"),
//!     Some(&SchemaType::Array(ArrayType::of(SchemaType::string()))),
//! );
//! ```

mod assemble;
mod merge;
mod package;
mod path;
mod resolve;
mod types;

pub use assemble::{
    Assembly, DroppedWrite, LeafSet, SetOutcome, ShapeConflict, assemble, assemble_with_report,
    deep_set,
};
pub use merge::{merge_into, merge_schema};
pub use package::FieldPackage;
pub use path::{FieldPath, Segment, WILDCARD};
pub use resolve::{
    DeclaredLeafResolver, LeafDeclaration, LeafResolver, resolve_leaves, rules_to_parameters,
};
pub use types::*;
