//! Value object trait: equality by value, not identity.
//!
//! A bottle's price is the value object in this domain: two prices with the
//! same amount are the same price, and a price never changes once issued.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, construct a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
