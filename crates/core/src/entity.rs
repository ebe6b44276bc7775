//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog records are identified by a natural key (a product's name), so the
/// id type is left open.
pub trait Entity {
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
