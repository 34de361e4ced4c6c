/// Identifier newtypes.
///
/// OSM numbers nodes, ways, and relations independently, so the numeric id
/// alone does not identify a primitive. [`PrimitiveId`] pairs it with the
/// [`PrimitiveKind`]; this is the key of every visited set and graph index.
use std::fmt;

use crate::enums::PrimitiveKind;

/// Stable, comparable identity of a map primitive.
///
/// Negative numbers are legal: editors assign them to primitives that have
/// not been uploaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId {
    kind: PrimitiveKind,
    id: i64,
}

impl PrimitiveId {
    /// Constructs an id of the given kind.
    pub const fn new(kind: PrimitiveKind, id: i64) -> Self {
        Self { kind, id }
    }

    /// Shorthand for a node id.
    pub const fn node(id: i64) -> Self {
        Self::new(PrimitiveKind::Node, id)
    }

    /// Shorthand for a way id.
    pub const fn way(id: i64) -> Self {
        Self::new(PrimitiveKind::Way, id)
    }

    /// Shorthand for a relation id.
    pub const fn relation(id: i64) -> Self {
        Self::new(PrimitiveKind::Relation, id)
    }

    /// The primitive kind.
    pub const fn kind(self) -> PrimitiveKind {
        self.kind
    }

    /// The numeric OSM id within its kind.
    pub const fn id(self) -> i64 {
        self.id
    }
}

/// Formats as `node/42`, the path segment osm.org uses for browse URLs.
impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
