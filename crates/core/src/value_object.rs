//! Value object trait: equality by value, not identity.
//!
//! Bars, patterns, prices and view models are value objects: two of them with the
//! same attributes are interchangeable, which is what lets a preview be compared
//! against a fresh recomputation.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(12.5), Price(12.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
