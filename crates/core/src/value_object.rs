//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two with the same attribute values are
/// equal. They are immutable once built; "changing" one means building a new
/// one.
///
/// - `StorageKey` is a value object (derived purely from an identity string).
/// - `Account` is an entity (identity = owner + account name, state changes).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
