/// Relation-membership graph built from a [`MapFile`] using `petgraph`.
///
/// Every primitive of the extract becomes a graph vertex carrying its id and
/// tags. Every relation member becomes a directed edge from the relation to
/// the member, so the referrers of a primitive are the sources of its
/// incoming edges.
///
/// # Two-Pass Construction
///
/// [`build_graph`] runs two passes over the extract:
/// 1. **Primitive pass** inserts all elements and records the
///    `PrimitiveId → NodeIndex` mapping. Fails on duplicate ids.
/// 2. **Member pass** resolves relation members and inserts edges. Members
///    that are not part of the extract are skipped and counted: extracts cut
///    at a bounding box or by a query routinely reference primitives they do
///    not include.
use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef as _;
use tracing::debug;

use crate::enums::PrimitiveKind;
use crate::file::{Element, MapFile, Member, Tags};
use crate::newtypes::PrimitiveId;
use crate::primitive::Primitive;

/// Weight stored on each graph vertex.
#[derive(Debug, Clone)]
pub struct PrimitiveWeight {
    /// Kind-qualified OSM id.
    pub id: PrimitiveId,
    /// The primitive's tags.
    pub tags: Tags,
}

/// Weight stored on each membership edge.
#[derive(Debug, Clone)]
pub struct MemberWeight {
    /// The member role within the relation.
    pub role: String,
}

/// Errors that can occur while building a [`MapGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBuildError {
    /// Two elements of the extract share a kind and numeric id.
    #[error("duplicate primitive: {0}")]
    DuplicatePrimitive(PrimitiveId),
}

/// Relation-membership graph over the primitives of one extract.
///
/// Construct with [`build_graph`]. Vertices are never removed, so every
/// `NodeIndex` handed out stays valid for the life of the graph.
#[derive(Debug)]
pub struct MapGraph {
    graph: StableDiGraph<PrimitiveWeight, MemberWeight>,
    id_to_index: HashMap<PrimitiveId, NodeIndex>,
    skipped_members: usize,
}

impl MapGraph {
    /// Number of primitives in the graph.
    pub fn primitive_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of resolved relation memberships.
    pub fn member_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of relation members that referenced primitives absent from
    /// the extract.
    pub fn skipped_members(&self) -> usize {
        self.skipped_members
    }

    /// Returns a handle to the primitive with the given id.
    pub fn get(&self, id: PrimitiveId) -> Option<PrimitiveRef<'_>> {
        self.id_to_index
            .get(&id)
            .map(|&index| PrimitiveRef { graph: self, index })
    }

    /// All primitives of the given kind, in ascending id order.
    pub fn primitives_of_kind(&self, kind: PrimitiveKind) -> Vec<PrimitiveRef<'_>> {
        let mut out: Vec<PrimitiveRef<'_>> = self
            .graph
            .node_indices()
            .map(|index| PrimitiveRef { graph: self, index })
            .filter(|p| p.id().kind() == kind)
            .collect();
        out.sort_by_key(Primitive::id);
        out
    }

    /// All nodes, in ascending id order.
    pub fn nodes(&self) -> Vec<PrimitiveRef<'_>> {
        self.primitives_of_kind(PrimitiveKind::Node)
    }

    fn weight(&self, index: NodeIndex) -> &PrimitiveWeight {
        &self.graph[index]
    }
}

/// A copyable handle to one primitive of a [`MapGraph`].
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveRef<'g> {
    graph: &'g MapGraph,
    index: NodeIndex,
}

impl<'g> PrimitiveRef<'g> {
    /// All tags of the primitive.
    pub fn tags(&self) -> &'g Tags {
        &self.graph.weight(self.index).tags
    }

    /// Members of this primitive as `(member, role)` pairs, in ascending id
    /// order. Empty for nodes and ways.
    pub fn members(&self) -> Vec<(PrimitiveRef<'g>, &'g str)> {
        let graph: &'g MapGraph = self.graph;
        let mut out: Vec<(PrimitiveRef<'g>, &'g str)> = graph
            .graph
            .edges_directed(self.index, petgraph::Direction::Outgoing)
            .map(|edge| {
                (
                    PrimitiveRef {
                        graph,
                        index: edge.target(),
                    },
                    edge.weight().role.as_str(),
                )
            })
            .collect();
        out.sort_by_key(|(member, _)| member.id());
        out
    }
}

impl Primitive for PrimitiveRef<'_> {
    fn id(&self) -> PrimitiveId {
        self.graph.weight(self.index).id
    }

    fn tag(&self, key: &str) -> Option<&str> {
        self.graph
            .weight(self.index)
            .tags
            .get(key)
            .map(String::as_str)
    }

    fn referrers(&self) -> Vec<Self> {
        let mut out: Vec<Self> = self
            .graph
            .graph
            .neighbors_directed(self.index, petgraph::Direction::Incoming)
            .map(|index| PrimitiveRef {
                graph: self.graph,
                index,
            })
            .filter(|p| p.kind() == PrimitiveKind::Relation)
            .collect();
        // A relation may list the same member under several roles.
        out.sort_by_key(Primitive::id);
        out.dedup_by_key(|p| p.id());
        out
    }
}

/// Constructs a [`MapGraph`] from a parsed extract.
///
/// Construction is O(P + M) where P is the primitive count and M the total
/// number of relation members.
///
/// # Errors
///
/// - [`GraphBuildError::DuplicatePrimitive`] when two elements share an id.
pub fn build_graph(file: MapFile) -> Result<MapGraph, GraphBuildError> {
    let mut graph: StableDiGraph<PrimitiveWeight, MemberWeight> =
        StableDiGraph::with_capacity(file.elements.len(), 0);
    let mut id_to_index: HashMap<PrimitiveId, NodeIndex> =
        HashMap::with_capacity(file.elements.len());
    let mut memberships: Vec<(NodeIndex, Vec<Member>)> = Vec::new();

    for element in file.elements {
        let id = element.primitive_id();
        if id_to_index.contains_key(&id) {
            return Err(GraphBuildError::DuplicatePrimitive(id));
        }
        let (tags, members) = match element {
            Element::Relation(r) => (r.tags, r.members),
            other @ (Element::Node(_) | Element::Way(_)) => (other.into_tags(), Vec::new()),
        };
        let idx = graph.add_node(PrimitiveWeight { id, tags });
        id_to_index.insert(id, idx);
        if !members.is_empty() {
            memberships.push((idx, members));
        }
    }

    let mut skipped_members = 0usize;
    for (relation_idx, members) in memberships {
        for member in members {
            let Some(&member_idx) = id_to_index.get(&member.primitive_id()) else {
                skipped_members += 1;
                continue;
            };
            graph.add_edge(relation_idx, member_idx, MemberWeight { role: member.role });
        }
    }

    debug!(
        primitives = graph.node_count(),
        memberships = graph.edge_count(),
        skipped_members,
        "map graph built"
    );

    Ok(MapGraph {
        graph,
        id_to_index,
        skipped_members,
    })
}
