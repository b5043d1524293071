//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. `Rupees` and the order form snapshot types are value
/// objects; the editing session is not.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FrameLine {
///     size: String,
///     unit_amount: Rupees,
/// }
///
/// impl ValueObject for FrameLine {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
