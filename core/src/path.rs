//! Dotted field paths.
//!
//! A field name such as `items.*.id` splits on `.` into segments. The literal
//! `*` segment addresses "every element of the enclosing array"; every other
//! segment names an object property.

use std::fmt;

/// Literal segment text that addresses array items.
pub const WILDCARD: &str = "*";

/// One segment of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// `*`: the items of the enclosing array.
    Wildcard,
    /// A named object property.
    Name(String),
}

impl Segment {
    /// Parses a single segment.
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            Self::Wildcard
        } else {
            Self::Name(raw.to_string())
        }
    }

    /// Returns the segment as it appears in the dotted key.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wildcard => WILDCARD,
            Self::Name(name) => name,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed dotted key. Always has at least one segment.
///
/// # Examples
///
/// ```
/// use rule_params_core::{FieldPath, Segment};
///
/// let path = FieldPath::parse("items.*.id");
/// assert_eq!(path.root(), "items");
/// assert!(path.is_nested());
/// assert_eq!(path.relative(), &[Segment::Wildcard, Segment::Name("id".into())]);
/// assert_eq!(path.to_string(), "items.*.id");
///
/// let flat = FieldPath::parse("page");
/// assert!(!flat.is_nested());
/// assert!(flat.relative().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Splits a dotted key into segments.
    ///
    /// Splitting never yields zero segments, so an empty key parses to a
    /// single empty name.
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key.split('.').map(Segment::parse).collect(),
        }
    }

    /// Returns all segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text of the first segment, used as the top-level group name.
    pub fn root(&self) -> &str {
        self.segments.first().map_or("", Segment::as_str)
    }

    /// Returns `true` when the key contains a `.`.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Segments after the root, i.e. the position below the top-level
    /// parameter.
    pub fn relative(&self) -> &[Segment] {
        self.segments.get(1..).unwrap_or_default()
    }

    /// Returns `true` when the segment right after the root is `*`.
    pub fn addresses_root_items(&self) -> bool {
        self.relative().first().is_some_and(Segment::is_wildcard)
    }
}

impl From<&str> for FieldPath {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wildcards() {
        let path = FieldPath::parse("matrix.*.*");
        assert_eq!(
            path.segments(),
            &[
                Segment::Name("matrix".into()),
                Segment::Wildcard,
                Segment::Wildcard
            ]
        );
        assert!(path.addresses_root_items());
    }

    #[test]
    fn test_star_inside_name_is_not_wildcard() {
        let path = FieldPath::parse("a.b*");
        assert_eq!(path.relative(), &[Segment::Name("b*".into())]);
        assert!(!path.addresses_root_items());
    }

    #[test]
    fn test_empty_key_has_one_segment() {
        let path = FieldPath::parse("");
        assert_eq!(path.len(), 1);
        assert_eq!(path.root(), "");
        assert!(!path.is_empty());
    }

    #[test]
    fn test_display_round_trips_key() {
        assert_eq!(FieldPath::from("a.*.b").to_string(), "a.*.b");
    }
}
