/// The read-only view of a map primitive that the validator consumes.
///
/// The validator never owns map data. Any editor or data model can be
/// validated by implementing [`Primitive`] for a cheap handle type; this
/// crate ships one such handle, [`crate::graph::PrimitiveRef`], over an
/// in-memory [`crate::graph::MapGraph`].
use crate::enums::PrimitiveKind;
use crate::newtypes::PrimitiveId;

/// A node, way, or relation as seen by the toponym rule.
///
/// Implementations are expected to be lightweight handles (a reference or an
/// index pair): [`Primitive::referrers`] returns new handles by value.
pub trait Primitive: Sized {
    /// Stable identity, used to detect cycles in the referrer graph.
    fn id(&self) -> PrimitiveId;

    /// Looks up a tag value by key.
    ///
    /// Returns `None` when the key is absent. Values are returned verbatim,
    /// without trimming or case folding.
    fn tag(&self, key: &str) -> Option<&str>;

    /// Relations that list this primitive as a member.
    ///
    /// Ways that contain a node are not referrers in this sense; only
    /// relation membership expresses administrative containment.
    fn referrers(&self) -> Vec<Self>;

    /// The primitive kind, derived from [`Primitive::id`].
    fn kind(&self) -> PrimitiveKind {
        self.id().kind()
    }

    /// Returns `true` if the tag `key` is present and equal to `value`.
    fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tag(key) == Some(value)
    }
}
