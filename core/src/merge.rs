//! Slot overwrite with child preservation.
//!
//! When a declaration lands on a slot that already holds a container (for
//! example `matrix.*` declared after `matrix.*.*`), [`merge_schema`] combines
//! the two so that children attached by earlier siblings survive.
//!
//! # Example
//!
//! ```
//! use rule_params_core::*;
//!
//! let existing = SchemaType::Object(
//!     ObjectType::new().with_property("id", SchemaType::integer()),
//! );
//! let incoming = SchemaType::Object(
//!     ObjectType::new().with_property("name", SchemaType::string()),
//! );
//!
//! let merged = merge_schema(existing, incoming);
//! assert_eq!(merged.as_object().unwrap().property_names(), vec!["id", "name"]);
//! ```

use tracing::debug;

use crate::{ArrayType, ObjectType, SchemaType};

/// Merges `overlay` onto `base`.
///
/// - Two objects: properties are merged by name (recursively), the overlay's
///   new properties are appended, and the required sets are unioned.
/// - Two arrays: the items are merged recursively; an unset side defers to the
///   other.
/// - Anything else: the overlay replaces the base, unless the base is a
///   container with children, which is kept.
///
/// # Examples
///
/// ```
/// use rule_params_core::*;
///
/// // Kind mismatch on an empty container: last writer wins.
/// let merged = merge_schema(SchemaType::object(), SchemaType::string());
/// assert_eq!(merged, SchemaType::string());
///
/// // An empty array declaration keeps items that are already known.
/// let known = SchemaType::Array(ArrayType::of(SchemaType::integer()));
/// let merged = merge_schema(known.clone(), SchemaType::array());
/// assert_eq!(merged, known);
/// ```
pub fn merge_schema(base: SchemaType, overlay: SchemaType) -> SchemaType {
    match (base, overlay) {
        (SchemaType::Object(base), SchemaType::Object(overlay)) => {
            SchemaType::Object(merge_objects(base, overlay))
        }
        (SchemaType::Array(base), SchemaType::Array(overlay)) => {
            SchemaType::Array(merge_arrays(base, overlay))
        }
        (base, overlay) if base.has_children() => {
            debug!(
                kept = %base.kind(),
                ignored = %overlay.kind(),
                "Kept populated container over conflicting overlay"
            );
            base
        }
        (_, overlay) => overlay,
    }
}

/// Merges `overlay` into the schema stored at `slot`, in place.
pub fn merge_into(slot: &mut SchemaType, overlay: SchemaType) {
    let base = std::mem::replace(slot, SchemaType::object());
    *slot = merge_schema(base, overlay);
}

fn merge_objects(mut base: ObjectType, overlay: ObjectType) -> ObjectType {
    for (name, schema) in overlay.properties {
        match base.properties.get_mut(&name) {
            Some(slot) => merge_into(slot, schema),
            None => {
                base.properties.insert(name, schema);
            }
        }
    }
    base.required.extend(overlay.required);
    base
}

fn merge_arrays(base: ArrayType, overlay: ArrayType) -> ArrayType {
    let items = match (base.items, overlay.items) {
        (Some(base), Some(overlay)) => Some(Box::new(merge_schema(*base, *overlay))),
        (base, None) => base,
        (None, overlay) => overlay,
    };
    ArrayType { items }
}
