//! Tree assembly from flat dotted declarations.
//!
//! [`assemble`] takes the leaf descriptors of every flat field, keyed by their
//! dotted name, and returns one [`Parameter`] per top-level name. Keys that
//! share a first segment are folded into a single parameter whose schema is a
//! tree of objects and arrays; keys without a `.` pass through unchanged.
//!
//! # Example
//!
//! ```
//! use rule_params_core::*;
//!
//! let mut leaves = LeafSet::new();
//! for (key, schema, required) in [
//!     ("items.*.id", SchemaType::integer(), true),
//!     ("items.*.name", SchemaType::string(), false),
//!     ("page", SchemaType::integer(), false),
//! ] {
//!     let leaf = if required {
//!         LeafDescriptor::required(key, ParamLocation::Query, schema)
//!     } else {
//!         LeafDescriptor::optional(key, ParamLocation::Query, schema)
//!     };
//!     leaves.insert(key.to_string(), leaf);
//! }
//!
//! let params = assemble(leaves);
//! assert_eq!(params.len(), 2);
//! assert_eq!(params[0].name, "items");
//! let item = params[0].schema.as_array().unwrap().items.as_deref().unwrap();
//! assert_eq!(item.as_object().unwrap().property_names(), vec!["id", "name"]);
//! assert!(item.as_object().unwrap().is_required("id"));
//! ```
//!
//! # Shape conflicts
//!
//! Declarations that disagree about the kind of a container never fail the
//! build. Intermediate containers are coerced to whatever the current path
//! needs (last writer wins), and a leaf that cannot be attached to the
//! container found at its position is dropped. Dropped writes are logged at
//! `debug` and listed by [`assemble_with_report`].

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::merge::merge_into;
use crate::{FieldPath, LeafDescriptor, Parameter, SchemaKind, SchemaType, Segment};

/// Leaf descriptors keyed by dotted field name, in declaration order.
pub type LeafSet = IndexMap<String, LeafDescriptor>;

/// Why a leaf write could not be attached.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeConflict {
    /// A named property was addressed inside something that is not an object.
    #[error("cannot set property `{property}`: container is {found}, not object")]
    PropertyOnNonObject { property: String, found: SchemaKind },
    /// `*` was addressed inside something that is not an array.
    #[error("cannot set array items: container is {found}, not array")]
    ItemsOnNonArray { found: SchemaKind },
    /// The slot holds a container with children of another kind than the
    /// leaf; the container is kept.
    #[error("slot already holds a populated {found}, not replacing it with {incoming}")]
    PopulatedContainer {
        found: SchemaKind,
        incoming: SchemaKind,
    },
    /// The relative path had no segments.
    #[error("path has no segment below its root")]
    EmptyPath,
}

/// Result of a single [`deep_set`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The leaf was written into the tree.
    Attached,
    /// The leaf was discarded; the tree is unchanged at the leaf position.
    Dropped(ShapeConflict),
}

/// A leaf write that [`assemble_with_report`] discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedWrite {
    /// Full dotted name of the discarded field.
    pub field: String,
    /// What the field collided with.
    pub conflict: ShapeConflict,
}

/// Parameters plus the writes that were discarded while building them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assembly {
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedWrite>,
}

/// Builds the top-level parameter list from flat leaf descriptors.
///
/// Output order follows the first occurrence of each top-level name among the
/// input keys. See the [module docs](self) for the merge rules.
pub fn assemble(leaves: LeafSet) -> Vec<Parameter> {
    assemble_with_report(leaves).parameters
}

/// Like [`assemble`], but also reports every discarded leaf write.
///
/// # Examples
///
/// ```
/// use rule_params_core::*;
///
/// let mut leaves = LeafSet::new();
/// leaves.insert(
///     "tags.*".into(),
///     LeafDescriptor::optional("tags.*", ParamLocation::Query, SchemaType::string()),
/// );
/// leaves.insert(
///     "tags.label".into(),
///     LeafDescriptor::optional("tags.label", ParamLocation::Query, SchemaType::string()),
/// );
///
/// let assembly = assemble_with_report(leaves);
/// assert_eq!(assembly.parameters.len(), 1);
/// // `tags` is an array because of `tags.*`, so `label` has nowhere to go.
/// assert_eq!(assembly.dropped.len(), 1);
/// assert_eq!(assembly.dropped[0].field, "tags.label");
/// assert_eq!(
///     assembly.dropped[0].conflict.to_string(),
///     "cannot set property `label`: container is array, not object",
/// );
/// ```
pub fn assemble_with_report(leaves: LeafSet) -> Assembly {
    let parsed: Vec<(FieldPath, LeafDescriptor)> = leaves
        .into_iter()
        .map(|(key, leaf)| (FieldPath::parse(&key), leaf))
        .collect();

    let nested_roots: HashSet<String> = parsed
        .iter()
        .filter(|(path, _)| path.is_nested())
        .map(|(path, _)| path.root().to_string())
        .collect();

    let mut entries: IndexMap<String, Entry> = IndexMap::new();
    for (path, leaf) in parsed {
        let root = path.root().to_string();
        if !nested_roots.contains(&root) {
            entries.insert(root, Entry::Flat(leaf));
            continue;
        }

        let Entry::Group(group) = entries
            .entry(root)
            .or_insert_with(|| Entry::Group(Group::default()))
        else {
            // Flat entries never share a root with a group.
            continue;
        };
        if path.is_nested() {
            group.siblings.push((path, leaf));
        } else {
            group.stub = Some(leaf);
        }
    }

    let mut dropped = Vec::new();
    let parameters: Vec<Parameter> = entries
        .into_iter()
        .map(|(name, entry)| match entry {
            Entry::Flat(leaf) => Parameter::from(leaf),
            Entry::Group(group) => build_group(&name, group, &mut dropped),
        })
        .collect();

    debug!(
        parameters = parameters.len(),
        dropped = dropped.len(),
        "Assembled parameters"
    );

    Assembly {
        parameters,
        dropped,
    }
}

enum Entry {
    Flat(LeafDescriptor),
    Group(Group),
}

#[derive(Default)]
struct Group {
    /// Flat declaration for the group name itself, if any.
    stub: Option<LeafDescriptor>,
    siblings: Vec<(FieldPath, LeafDescriptor)>,
}

fn build_group(name: &str, group: Group, dropped: &mut Vec<DroppedWrite>) -> Parameter {
    let mut base = match group.stub {
        Some(stub) => Parameter::from(stub),
        None => {
            let location = group
                .siblings
                .first()
                .map(|(_, leaf)| leaf.location)
                .unwrap_or_default();
            let schema = if group
                .siblings
                .iter()
                .any(|(path, _)| path.addresses_root_items())
            {
                SchemaType::array()
            } else {
                SchemaType::object()
            };
            debug!(group = name, kind = %schema.kind(), "Synthesized parent parameter");
            Parameter::new(name, location, schema)
        }
    };

    for (path, leaf) in group.siblings {
        match deep_set(&mut base.schema, path.relative(), leaf.schema, leaf.required) {
            SetOutcome::Attached => {}
            SetOutcome::Dropped(conflict) => {
                debug!(field = %path, reason = %conflict, "Dropped conflicting field");
                dropped.push(DroppedWrite {
                    field: path.to_string(),
                    conflict,
                });
            }
        }
    }

    base
}

/// Writes `leaf` at `path` below `root`, creating containers along the way.
///
/// `path` is relative to `root` (the top-level name already stripped). Every
/// segment but the last selects or creates a container:
///
/// - `*` turns the node into an array and descends into its items, which are
///   made an array (next segment `*`) or an object (next segment a name).
/// - a name turns the node into an object and descends into that property,
///   creating it as an array or object if it is missing.
///
/// The last segment writes the leaf: `*` into an array's items, a name into an
/// object's properties (added to `required` when `required` is set, never
/// removed). A write onto a slot that already holds a container of the same
/// kind is merged so earlier children survive. A write of another kind onto a
/// container with children is dropped and the container kept. Any other
/// combination is dropped.
///
/// # Examples
///
/// ```
/// use rule_params_core::*;
///
/// let mut root = SchemaType::array();
/// let path = FieldPath::parse("matrix.*.*");
/// let outcome = deep_set(&mut root, path.relative(), SchemaType::integer(), false);
/// assert_eq!(outcome, SetOutcome::Attached);
///
/// let inner = root.as_array().unwrap().items.as_deref().unwrap();
/// assert_eq!(inner.as_array().unwrap().items.as_deref(), Some(&SchemaType::integer()));
///
/// // A named property cannot live directly on an array.
/// let mut root = SchemaType::array();
/// let outcome = deep_set(&mut root, &[Segment::Name("x".into())], SchemaType::string(), true);
/// assert!(matches!(outcome, SetOutcome::Dropped(ShapeConflict::PropertyOnNonObject { .. })));
/// ```
pub fn deep_set(
    root: &mut SchemaType,
    path: &[Segment],
    leaf: SchemaType,
    required: bool,
) -> SetOutcome {
    let Some(last) = path.last() else {
        return SetOutcome::Dropped(ShapeConflict::EmptyPath);
    };

    match (last, resolve_container(root, path)) {
        (Segment::Wildcard, SchemaType::Array(array)) => {
            match array.items.as_deref_mut() {
                Some(items) => {
                    if let Err(conflict) = overwrite_slot(items, leaf) {
                        return SetOutcome::Dropped(conflict);
                    }
                }
                None => array.items = Some(Box::new(leaf)),
            }
            SetOutcome::Attached
        }
        (Segment::Name(name), SchemaType::Object(object)) => {
            match object.properties.get_mut(name) {
                Some(slot) => {
                    if let Err(conflict) = overwrite_slot(slot, leaf) {
                        return SetOutcome::Dropped(conflict);
                    }
                }
                None => object.add_property(name, leaf),
            }
            if required {
                object.add_required(name);
            }
            SetOutcome::Attached
        }
        (Segment::Wildcard, other) => SetOutcome::Dropped(ShapeConflict::ItemsOnNonArray {
            found: other.kind(),
        }),
        (Segment::Name(name), other) => SetOutcome::Dropped(ShapeConflict::PropertyOnNonObject {
            property: name.clone(),
            found: other.kind(),
        }),
    }
}

/// Merges `leaf` into an occupied slot unless that would discard children.
fn overwrite_slot(slot: &mut SchemaType, leaf: SchemaType) -> Result<(), ShapeConflict> {
    if slot.has_children() && slot.kind() != leaf.kind() {
        return Err(ShapeConflict::PopulatedContainer {
            found: slot.kind(),
            incoming: leaf.kind(),
        });
    }
    merge_into(slot, leaf);
    Ok(())
}

/// Walks all but the last segment of `path`, returning the container that
/// should receive the leaf.
fn resolve_container<'a>(node: &'a mut SchemaType, path: &[Segment]) -> &'a mut SchemaType {
    let [segment, rest @ ..] = path else {
        return node;
    };
    let Some(next) = rest.first() else {
        return node;
    };

    match segment {
        Segment::Wildcard => {
            if !matches!(node, SchemaType::Array(_)) {
                debug!(from = %node.kind(), to = %SchemaKind::Array, "Coercing container");
            }
            let array = node.make_array();
            let wanted = container_kind(next);
            if array.items.as_deref().is_some_and(|items| items.kind() != wanted) {
                debug!(to = %wanted, "Replacing array items");
                array.items = None;
            }
            let items = array
                .items
                .get_or_insert_with(|| Box::new(empty_container(wanted)));
            resolve_container(items, rest)
        }
        Segment::Name(name) => {
            if !matches!(node, SchemaType::Object(_)) {
                debug!(from = %node.kind(), to = %SchemaKind::Object, "Coercing container");
            }
            let child = node
                .make_object()
                .properties
                .entry(name.clone())
                .or_insert_with(|| empty_container(container_kind(next)));
            resolve_container(child, rest)
        }
    }
}

/// Container kind needed to hold `next`.
fn container_kind(next: &Segment) -> SchemaKind {
    if next.is_wildcard() {
        SchemaKind::Array
    } else {
        SchemaKind::Object
    }
}

fn empty_container(kind: SchemaKind) -> SchemaType {
    match kind {
        SchemaKind::Array => SchemaType::array(),
        _ => SchemaType::object(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArrayType, ObjectType, ParamLocation};

    use super::*;

    fn leaf(key: &str, schema: SchemaType) -> (String, LeafDescriptor) {
        (
            key.to_string(),
            LeafDescriptor::optional(key, ParamLocation::Query, schema),
        )
    }

    fn required(key: &str, schema: SchemaType) -> (String, LeafDescriptor) {
        (
            key.to_string(),
            LeafDescriptor::required(key, ParamLocation::Query, schema),
        )
    }

    fn leaves<const N: usize>(entries: [(String, LeafDescriptor); N]) -> LeafSet {
        entries.into_iter().collect()
    }

    fn names(params: &[Parameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_flat_fields_pass_through_unchanged() {
        let input = leaves([
            required("page", SchemaType::integer()),
            leaf("search", SchemaType::string()),
            leaf("active", SchemaType::boolean()),
        ]);
        let expected: Vec<Parameter> = input.values().cloned().map(Parameter::from).collect();

        assert_eq!(assemble(input), expected);
    }

    #[test]
    fn test_object_nesting() {
        let params = assemble(leaves([
            leaf("a.b", SchemaType::string()),
            required("a.c", SchemaType::integer()),
        ]));

        let mut expected = ObjectType::new()
            .with_property("b", SchemaType::string())
            .with_property("c", SchemaType::integer());
        expected.add_required("c");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "a");
        assert!(!params[0].required);
        assert_eq!(params[0].schema, SchemaType::Object(expected));
    }

    #[test]
    fn test_array_of_scalars() {
        let params = assemble(leaves([leaf("items.*", SchemaType::string())]));

        assert_eq!(names(&params), vec!["items"]);
        assert_eq!(
            params[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::string()))
        );
    }

    #[test]
    fn test_array_of_objects() {
        let params = assemble(leaves([
            leaf("items.*.id", SchemaType::integer()),
            leaf("items.*.name", SchemaType::string()),
        ]));

        let object = ObjectType::new()
            .with_property("id", SchemaType::integer())
            .with_property("name", SchemaType::string());
        assert_eq!(
            params[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::Object(object)))
        );
    }

    #[test]
    fn test_array_of_arrays() {
        let params = assemble(leaves([leaf("matrix.*.*", SchemaType::integer())]));

        assert_eq!(
            params[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::Array(ArrayType::of(
                SchemaType::integer()
            ))))
        );
    }

    #[test]
    fn test_parent_stub_is_reused_as_base() {
        let params = assemble(leaves([
            required("items", SchemaType::array()),
            leaf("items.*", SchemaType::string()),
        ]));

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "items");
        assert!(params[0].required);
        assert_eq!(
            params[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::string()))
        );
    }

    #[test]
    fn test_parent_stub_declared_after_children() {
        let params = assemble(leaves([
            leaf("filter.status", SchemaType::string()),
            required("filter", SchemaType::object()),
        ]));

        assert_eq!(params.len(), 1);
        assert!(params[0].required);
        let object = params[0].schema.as_object().unwrap();
        assert_eq!(object.property_names(), vec!["status"]);
    }

    #[test]
    fn test_parent_stub_location_wins_over_siblings() {
        let mut input = leaves([leaf("meta.id", SchemaType::integer())]);
        input.insert(
            "meta".into(),
            LeafDescriptor::optional("meta", ParamLocation::Header, SchemaType::object()),
        );

        let params = assemble(input);
        assert_eq!(params[0].location, ParamLocation::Header);
    }

    #[test]
    fn test_synthesized_parent_inherits_first_sibling_location() {
        let input = leaves([
            (
                "user.id".to_string(),
                LeafDescriptor::optional("user.id", ParamLocation::Path, SchemaType::integer()),
            ),
            leaf("user.name", SchemaType::string()),
        ]);

        let params = assemble(input);
        assert_eq!(params[0].location, ParamLocation::Path);
    }

    #[test]
    fn test_required_accumulates_across_siblings() {
        let params = assemble(leaves([
            required("items.*.id", SchemaType::integer()),
            leaf("items.*.name", SchemaType::string()),
            leaf(
                "items.*",
                SchemaType::Object(ObjectType::new().with_property("id", SchemaType::integer())),
            ),
        ]));

        let array = params[0].schema.as_array().unwrap();
        let item = array.items.as_deref().unwrap().as_object().unwrap();
        assert!(item.is_required("id"));
        assert!(!item.is_required("name"));
    }

    #[test]
    fn test_required_not_retracted_by_later_optional_write() {
        let mut root = SchemaType::object();
        let path = [Segment::Name("id".into())];
        deep_set(&mut root, &path, SchemaType::integer(), true);
        deep_set(&mut root, &path, SchemaType::string(), false);

        let object = root.as_object().unwrap();
        assert!(object.is_required("id"));
        assert_eq!(object.property("id"), Some(&SchemaType::string()));
    }

    #[test]
    fn test_order_follows_first_occurrence() {
        let params = assemble(leaves([
            leaf("sort", SchemaType::string()),
            leaf("filter.name", SchemaType::string()),
            leaf("page", SchemaType::integer()),
            leaf("filter.age", SchemaType::integer()),
            leaf("items", SchemaType::array()),
            leaf("items.*", SchemaType::string()),
        ]));

        assert_eq!(names(&params), vec!["sort", "filter", "page", "items"]);
    }

    #[test]
    fn test_sibling_containers_are_shared() {
        let params = assemble(leaves([
            leaf("a.b.c", SchemaType::string()),
            leaf("a.b.d", SchemaType::integer()),
        ]));

        let a = params[0].schema.as_object().unwrap();
        let b = a.property("b").unwrap().as_object().unwrap();
        assert_eq!(b.property_names(), vec!["c", "d"]);
    }

    #[test]
    fn test_overwriting_container_keeps_grandchildren() {
        let params = assemble(leaves([
            leaf("matrix.*.*", SchemaType::integer()),
            leaf("matrix.*", SchemaType::array()),
        ]));

        assert_eq!(
            params[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::Array(ArrayType::of(
                SchemaType::integer()
            ))))
        );
    }

    #[test]
    fn test_overwriting_object_property_keeps_children() {
        let params = assemble(leaves([
            required("a.b.c", SchemaType::string()),
            required("a.b", SchemaType::object()),
        ]));

        let a = params[0].schema.as_object().unwrap();
        assert!(a.is_required("b"));
        let b = a.property("b").unwrap().as_object().unwrap();
        assert_eq!(b.property_names(), vec!["c"]);
        assert!(b.is_required("c"));
    }

    #[test]
    fn test_scalar_stub_with_single_child_drops_write() {
        let assembly = assemble_with_report(leaves([
            leaf("name", SchemaType::string()),
            leaf("name.first", SchemaType::string()),
        ]));

        assert_eq!(assembly.parameters.len(), 1);
        assert_eq!(assembly.parameters[0].schema, SchemaType::string());
        assert_eq!(
            assembly.dropped,
            vec![DroppedWrite {
                field: "name.first".into(),
                conflict: ShapeConflict::PropertyOnNonObject {
                    property: "first".into(),
                    found: SchemaKind::String,
                },
            }]
        );
    }

    #[test]
    fn test_scalar_stub_is_coerced_by_deeper_child() {
        let assembly = assemble_with_report(leaves([
            leaf("name", SchemaType::string()),
            leaf("name.parts.first", SchemaType::string()),
        ]));

        assert!(assembly.dropped.is_empty());
        let name = assembly.parameters[0].schema.as_object().unwrap();
        let parts = name.property("parts").unwrap().as_object().unwrap();
        assert_eq!(parts.property_names(), vec!["first"]);
    }

    #[test]
    fn test_wildcard_leaf_on_object_is_dropped() {
        let assembly = assemble_with_report(leaves([
            leaf("a.b", SchemaType::string()),
            leaf("a.b.*", SchemaType::string()),
        ]));

        assert_eq!(
            assembly.dropped,
            vec![DroppedWrite {
                field: "a.b.*".into(),
                conflict: ShapeConflict::ItemsOnNonArray {
                    found: SchemaKind::String,
                },
            }]
        );
        let a = assembly.parameters[0].schema.as_object().unwrap();
        assert_eq!(a.property("b"), Some(&SchemaType::string()));
    }

    #[test]
    fn test_wildcard_coerces_object_items_to_array() {
        let params = assemble(leaves([
            leaf("grid.*.label", SchemaType::string()),
            leaf("grid.*.*", SchemaType::integer()),
        ]));

        assert_eq!(
            params[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::Array(ArrayType::of(
                SchemaType::integer()
            ))))
        );
    }

    #[test]
    fn test_unset_items_stay_unset() {
        let params = assemble(leaves([leaf("list.*.tags.*.x", SchemaType::string())]));
        let item = params[0].schema.as_array().unwrap().items.as_deref().unwrap();
        let tags = item.as_object().unwrap().property("tags").unwrap();
        let tag = tags.as_array().unwrap().items.as_deref().unwrap();
        assert_eq!(tag.as_object().unwrap().property_names(), vec!["x"]);

        let params = assemble(leaves([
            required("list", SchemaType::array()),
            leaf("other.x", SchemaType::string()),
        ]));
        assert_eq!(params[0].schema, SchemaType::array());
    }

    #[test]
    fn test_scalar_after_object_items_keeps_children() {
        let assembly = assemble_with_report(leaves([
            required("items.*.id", SchemaType::integer()),
            leaf("items.*", SchemaType::string()),
        ]));

        let mut item = ObjectType::new().with_property("id", SchemaType::integer());
        item.add_required("id");
        assert_eq!(
            assembly.parameters[0].schema,
            SchemaType::Array(ArrayType::of(SchemaType::Object(item)))
        );
        assert_eq!(
            assembly.dropped,
            vec![DroppedWrite {
                field: "items.*".into(),
                conflict: ShapeConflict::PopulatedContainer {
                    found: SchemaKind::Object,
                    incoming: SchemaKind::String,
                },
            }]
        );
    }

    #[test]
    fn test_items_shape_does_not_depend_on_declaration_order() {
        let scalar_first = assemble(leaves([
            leaf("items.*", SchemaType::string()),
            leaf("items.*.id", SchemaType::integer()),
        ]));
        let scalar_last = assemble(leaves([
            leaf("items.*.id", SchemaType::integer()),
            leaf("items.*", SchemaType::string()),
        ]));

        assert_eq!(scalar_first, scalar_last);
    }

    #[test]
    fn test_scalar_after_nested_property_keeps_grandchildren() {
        let assembly = assemble_with_report(leaves([
            leaf("a.b.c", SchemaType::integer()),
            required("a.b", SchemaType::string()),
        ]));

        let a = assembly.parameters[0].schema.as_object().unwrap();
        let b = a.property("b").unwrap().as_object().unwrap();
        assert_eq!(b.property("c"), Some(&SchemaType::integer()));
        assert!(!a.is_required("b"));
        assert_eq!(
            assembly.dropped,
            vec![DroppedWrite {
                field: "a.b".into(),
                conflict: ShapeConflict::PopulatedContainer {
                    found: SchemaKind::Object,
                    incoming: SchemaKind::String,
                },
            }]
        );
    }

    #[test]
    fn test_scalar_replaces_empty_container() {
        let mut root = SchemaType::object();
        let path = [Segment::Name("b".into())];
        deep_set(&mut root, &path, SchemaType::object(), false);

        assert_eq!(
            deep_set(&mut root, &path, SchemaType::string(), false),
            SetOutcome::Attached
        );
        assert_eq!(
            root.as_object().unwrap().property("b"),
            Some(&SchemaType::string())
        );
    }

    #[test]
    fn test_deep_set_empty_path_is_dropped() {
        let mut root = SchemaType::object();
        assert_eq!(
            deep_set(&mut root, &[], SchemaType::string(), false),
            SetOutcome::Dropped(ShapeConflict::EmptyPath)
        );
        assert_eq!(root, SchemaType::object());
    }

    #[test]
    fn test_assembly_report_serializes_dropped() {
        let assembly = assemble_with_report(leaves([
            leaf("a", SchemaType::integer()),
            leaf("a.*", SchemaType::string()),
        ]));
        let value = serde_json::to_value(&assembly).unwrap();
        assert_eq!(
            value["dropped"],
            serde_json::json!([{
                "field": "a.*",
                "conflict": {"kind": "items_on_non_array", "found": "integer"}
            }])
        );
    }
}
