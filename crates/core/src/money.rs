//! Whole-rupee amounts.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in whole rupees.
///
/// The shop never bills fractions of a rupee, so amounts are plain integers.
/// Arithmetic saturates instead of overflowing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(i64);

impl Rupees {
    pub const ZERO: Rupees = Rupees(0);

    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> i64 {
        self.0
    }

    /// `self × quantity`, saturating at the `i64` bounds.
    pub fn times(self, quantity: i64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(self, other: Rupees) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// ASCII rendering (`Rs. 1070`) for output that cannot carry the rupee sign.
    pub fn ascii(self) -> String {
        format!("Rs. {}", self.0)
    }
}

impl ValueObject for Rupees {}

impl core::fmt::Display for Rupees {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl core::ops::Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        self.saturating_add(rhs)
    }
}

impl From<i64> for Rupees {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_uses_rupee_sign() {
        assert_eq!(Rupees::new(1070).to_string(), "₹1070");
        assert_eq!(Rupees::new(70).ascii(), "Rs. 70");
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Rupees::new(i64::MAX).times(2), Rupees::new(i64::MAX));
        assert_eq!(Rupees::new(i64::MAX) + Rupees::new(1), Rupees::new(i64::MAX));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: within range, `times` is exact multiplication.
        #[test]
        fn times_is_exact_in_range(amount in 0i64..1_000_000, qty in 1i64..10_000) {
            prop_assert_eq!(Rupees::new(amount).times(qty).amount(), amount * qty);
        }
    }
}
