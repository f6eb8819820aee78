//! Entity trait: identity distinct from attribute values.

/// Entity marker + minimal interface.
///
/// Identity is optional because records exist in memory before the storage
/// layer assigns them a key.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier, if the entity has been persisted.
    fn id(&self) -> Option<Self::Id>;

    /// Whether the storage layer has assigned an identifier.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
