/// Administrative containment: is a primitive inside a country boundary?
///
/// Map data has no direct "country" pointer. A village node is a member of a
/// municipality relation, which is a member of a region relation, which is a
/// member of the country relation. The only correct test is an upward walk
/// over relation referrers until a relation tagged as the country is found.
///
/// # Traversal
///
/// [`ContainmentChecker`] walks with an explicit stack rather than recursion,
/// so deep hierarchies cannot overflow the call stack. A fresh visited set is
/// created per query and every primitive is expanded at most once, which
/// bounds the walk by the number of relations in the data and guarantees
/// termination on cyclic membership graphs. Sibling order does not affect
/// the answer; the walk explores referrers in the order the primitive
/// reports them.
///
/// Missing or malformed tags on intermediate relations are not errors: such
/// relations simply do not match and the walk continues.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::enums::PrimitiveKind;
use crate::newtypes::PrimitiveId;
use crate::primitive::Primitive;

/// Tag key carrying the administrative level of a boundary relation.
pub const ADMIN_LEVEL_KEY: &str = "admin_level";
/// Tag key carrying the international name of a boundary relation.
pub const INT_NAME_KEY: &str = "int_name";

/// Identifies the boundary relation of one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryBoundary {
    /// Required `int_name` tag value, e.g. `"Georgia"`.
    pub int_name: String,
    /// Required `admin_level` tag value; `"2"` is the country level.
    pub admin_level: String,
}

impl CountryBoundary {
    /// Constructs a boundary description.
    pub fn new(int_name: impl Into<String>, admin_level: impl Into<String>) -> Self {
        Self {
            int_name: int_name.into(),
            admin_level: admin_level.into(),
        }
    }

    /// Returns `true` if `primitive` is a relation carrying both tags with
    /// exactly the configured values.
    pub fn matches<P: Primitive>(&self, primitive: &P) -> bool {
        primitive.kind() == PrimitiveKind::Relation
            && primitive.has_tag(ADMIN_LEVEL_KEY, &self.admin_level)
            && primitive.has_tag(INT_NAME_KEY, &self.int_name)
    }
}

/// Answers containment queries against one [`CountryBoundary`].
///
/// Holds no state between queries; one checker can serve any number of
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct ContainmentChecker<'b> {
    boundary: &'b CountryBoundary,
}

impl<'b> ContainmentChecker<'b> {
    /// Creates a checker for `boundary`.
    pub fn new(boundary: &'b CountryBoundary) -> Self {
        Self { boundary }
    }

    /// The boundary this checker tests against.
    pub fn boundary(&self) -> &'b CountryBoundary {
        self.boundary
    }

    /// Returns `true` if `primitive` is, directly or transitively, a member
    /// of the boundary relation, or is the boundary relation itself.
    pub fn is_contained<P: Primitive>(&self, primitive: &P) -> bool {
        self.containment_path(primitive).is_some()
    }

    /// Returns the chain of ids from `primitive` up to the boundary relation,
    /// both ends inclusive, or `None` if the primitive is not contained.
    ///
    /// For a node that is a direct member of the country relation the path
    /// has two entries. The path found is the first one reached by the
    /// depth-first walk, not necessarily the shortest.
    pub fn containment_path<P: Primitive>(&self, primitive: &P) -> Option<Vec<PrimitiveId>> {
        let mut visited: HashSet<PrimitiveId> = HashSet::new();
        // (id, index of the referree's entry) for every expanded primitive.
        let mut trail: Vec<(PrimitiveId, Option<usize>)> = Vec::new();
        let mut stack: Vec<(P, usize)> = Vec::new();

        let start = primitive.id();
        visited.insert(start);
        trail.push((start, None));
        if self.boundary.matches(primitive) {
            return Some(path_to(&trail, 0));
        }
        push_referrers(primitive, 0, &mut stack);

        while let Some((current, from)) = stack.pop() {
            let id = current.id();
            if !visited.insert(id) {
                trace!(%id, "referrer already visited");
                continue;
            }
            let slot = trail.len();
            trail.push((id, Some(from)));
            if self.boundary.matches(&current) {
                return Some(path_to(&trail, slot));
            }
            push_referrers(&current, slot, &mut stack);
        }

        trace!(%start, expanded = trail.len(), "no path to boundary");
        None
    }
}

/// Pushes the referrers of `primitive` so that the first one reported is
/// popped first.
fn push_referrers<P: Primitive>(primitive: &P, slot: usize, stack: &mut Vec<(P, usize)>) {
    stack.extend(primitive.referrers().into_iter().rev().map(|r| (r, slot)));
}

/// Rebuilds the path from the start primitive to `trail[slot]`.
fn path_to(trail: &[(PrimitiveId, Option<usize>)], slot: usize) -> Vec<PrimitiveId> {
    let mut path = Vec::new();
    let mut cursor = Some(slot);
    while let Some(i) = cursor {
        let Some(&(id, from)) = trail.get(i) else {
            break;
        };
        path.push(id);
        cursor = from;
    }
    path.reverse();
    path
}
