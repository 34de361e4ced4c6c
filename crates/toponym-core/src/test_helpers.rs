//! Shared test helper functions for constructing map fixtures.
//!
//! This module is compiled only in test builds and provides constructors for
//! [`Element`] and [`MapFile`] used across unit test modules throughout
//! `toponym-core`.
//!
//! Integration tests in `crates/toponym-core/tests/` define their own local
//! helpers because they link against the non-test library build where this
//! module is not available.

use crate::file::{Element, MapFile, Member, NodeElement, RelationElement, Tags, WayElement};
use crate::newtypes::PrimitiveId;

/// Role given to every member created by [`relation`].
pub const DEFAULT_ROLE: &str = "subarea";

fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// Wraps elements into a [`MapFile`] with no generator.
pub fn extract(elements: Vec<Element>) -> MapFile {
    MapFile {
        generator: None,
        elements,
    }
}

/// Creates a node without coordinates.
pub fn node(id: i64, pairs: &[(&str, &str)]) -> Element {
    Element::Node(NodeElement {
        id,
        lat: None,
        lon: None,
        tags: tags(pairs),
    })
}

/// Creates a way over the given node ids.
pub fn way(id: i64, nodes: &[i64], pairs: &[(&str, &str)]) -> Element {
    Element::Way(WayElement {
        id,
        nodes: nodes.to_vec(),
        tags: tags(pairs),
    })
}

/// Creates a relation whose members all carry [`DEFAULT_ROLE`].
pub fn relation(id: i64, pairs: &[(&str, &str)], members: &[PrimitiveId]) -> Element {
    Element::Relation(RelationElement {
        id,
        members: members
            .iter()
            .map(|m| Member {
                kind: m.kind(),
                reference: m.id(),
                role: DEFAULT_ROLE.to_owned(),
            })
            .collect(),
        tags: tags(pairs),
    })
}

/// Creates the Georgia country relation (`admin_level=2`, `int_name=Georgia`).
pub fn georgia(id: i64, members: &[PrimitiveId]) -> Element {
    relation(
        id,
        &[
            ("type", "boundary"),
            ("boundary", "administrative"),
            ("admin_level", "2"),
            ("int_name", "Georgia"),
        ],
        members,
    )
}
