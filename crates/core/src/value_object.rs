//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// `MaterialComposition`s with the same fields are the same composition.
/// To "modify" one, build a new value. Entities, by contrast, are compared
/// by identifier (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
