//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values:
/// contact details, permission records and statistics blocks are all values.
/// To "modify" one, build a new one and replace it whole.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
