/// Serde model of an OSM JSON extract.
///
/// The accepted shape is the one produced by the Overpass API with
/// `[out:json]`: a top-level object with an `elements` array whose entries are
/// discriminated by `type`. Geometry (`lat`/`lon`, way node lists) is carried
/// through but never interpreted. Unknown keys at every level are ignored, so
/// `osm3s` metadata, `timestamp`, `version`, and similar fields are accepted.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::PrimitiveKind;
use crate::newtypes::PrimitiveId;

/// Tag map of a single primitive.
pub type Tags = BTreeMap<String, String>;

/// The input JSON could not be deserialized into a [`MapFile`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {detail}")]
pub struct ParseError {
    /// One-based line of the failure.
    pub line: usize,
    /// One-based column of the failure.
    pub column: usize,
    /// The underlying `serde_json` message.
    pub detail: String,
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}

/// A complete map extract.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapFile {
    /// Free-form producer string, e.g. `"Overpass API 0.7.62"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    /// All primitives in the extract, in file order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl MapFile {
    /// Parses an extract from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] with line and column when the input is not
    /// valid JSON or does not match the extract shape.
    pub fn from_json(content: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// One primitive of the extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// `"type": "node"`
    Node(NodeElement),
    /// `"type": "way"`
    Way(WayElement),
    /// `"type": "relation"`
    Relation(RelationElement),
}

impl Element {
    /// The kind-qualified id of the element.
    pub fn primitive_id(&self) -> PrimitiveId {
        match self {
            Self::Node(n) => PrimitiveId::node(n.id),
            Self::Way(w) => PrimitiveId::way(w.id),
            Self::Relation(r) => PrimitiveId::relation(r.id),
        }
    }

    /// The element's tags.
    pub fn tags(&self) -> &Tags {
        match self {
            Self::Node(n) => &n.tags,
            Self::Way(w) => &w.tags,
            Self::Relation(r) => &r.tags,
        }
    }

    /// Consumes the element, returning its tags.
    pub fn into_tags(self) -> Tags {
        match self {
            Self::Node(n) => n.tags,
            Self::Way(w) => w.tags,
            Self::Relation(r) => r.tags,
        }
    }
}

/// A node element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    /// Numeric node id.
    pub id: i64,
    /// Latitude in degrees, when the extract carries geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in degrees, when the extract carries geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Tags; absent in the JSON for untagged nodes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: Tags,
}

/// A way element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayElement {
    /// Numeric way id.
    pub id: i64,
    /// Node ids in way order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<i64>,
    /// Tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: Tags,
}

/// A relation element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationElement {
    /// Numeric relation id.
    pub id: i64,
    /// Members in relation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
    /// Tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: Tags,
}

/// A relation member reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Kind of the referenced primitive.
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    /// Numeric id of the referenced primitive.
    #[serde(rename = "ref")]
    pub reference: i64,
    /// Member role, e.g. `"admin_centre"`, `"subarea"`, `"label"`.
    #[serde(default)]
    pub role: String,
}

impl Member {
    /// The kind-qualified id of the referenced primitive.
    pub fn primitive_id(&self) -> PrimitiveId {
        PrimitiveId::new(self.kind, self.reference)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    const OVERPASS: &str = r#"{
        "version": 0.6,
        "generator": "Overpass API 0.7.62",
        "osm3s": { "timestamp_osm_base": "2024-01-01T00:00:00Z" },
        "elements": [
            { "type": "node", "id": 1, "lat": 41.69, "lon": 44.80,
              "tags": { "place": "city", "name:en": "Tbilisi" } },
            { "type": "way", "id": 10, "nodes": [1, 2] },
            { "type": "relation", "id": 28699,
              "members": [ { "type": "node", "ref": 1, "role": "admin_centre" } ],
              "tags": { "admin_level": "2", "int_name": "Georgia" } }
        ]
    }"#;

    #[test]
    fn parses_overpass_output() {
        let file = MapFile::from_json(OVERPASS).expect("valid extract");
        assert_eq!(file.generator.as_deref(), Some("Overpass API 0.7.62"));
        assert_eq!(file.elements.len(), 3);

        let ids: Vec<PrimitiveId> = file.elements.iter().map(Element::primitive_id).collect();
        assert_eq!(
            ids,
            vec![
                PrimitiveId::node(1),
                PrimitiveId::way(10),
                PrimitiveId::relation(28699)
            ]
        );

        match &file.elements[2] {
            Element::Relation(r) => {
                assert_eq!(r.members.len(), 1);
                assert_eq!(r.members[0].primitive_id(), PrimitiveId::node(1));
                assert_eq!(r.members[0].role, "admin_centre");
            }
            other => panic!("expected relation, got {other:?}"),
        }
    }

    #[test]
    fn untagged_node_has_empty_tags() {
        let file = MapFile::from_json(r#"{"elements":[{"type":"node","id":5}]}"#)
            .expect("valid extract");
        assert!(file.elements[0].tags().is_empty());
    }

    #[test]
    fn missing_elements_is_empty_extract() {
        let file = MapFile::from_json("{}").expect("valid extract");
        assert!(file.elements.is_empty());
    }

    #[test]
    fn unknown_element_type_is_rejected() {
        let err = MapFile::from_json(r#"{"elements":[{"type":"area","id":5}]}"#)
            .expect_err("area is not an element type");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn parse_error_reports_position() {
        let err = MapFile::from_json("{\n  \"elements\": [ !!\n}").expect_err("bad json");
        assert_eq!(err.line, 2);
        assert!(err.to_string().starts_with("line 2, column"), "{err}");
    }
}
