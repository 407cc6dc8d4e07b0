//! Entity trait: identity that survives filtering and re-rendering.

/// A record addressed by a stable identifier.
///
/// Identifiers are ordered; listings without an explicit sort key fall back
/// to identifier order.
pub trait Entity {
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
