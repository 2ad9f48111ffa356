//! Entity trait: identity that survives state changes.

/// An object defined by its identifier rather than its attributes.
///
/// A `Customer` that changes name or address is still the same customer.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
