//! Value object trait: equality by value, not identity.
//!
//! Prices, currencies and slugs in the storefront are values: two products
//! priced at `9999` USD minor units carry the *same* price, there is nothing to
//! tell them apart by.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     minor: i64,
///     currency: Currency,
/// }
///
/// impl ValueObject for Money {}
///
/// let a = Money { minor: 9999, currency: Currency::Usd };
/// let b = Money { minor: 9999, currency: Currency::Usd };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
