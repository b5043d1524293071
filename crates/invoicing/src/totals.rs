//! Invoice arithmetic.

use serde::{Deserialize, Serialize};

use snapzone_core::{Rupees, ValueObject};

use crate::form::OrderForm;

/// Flat surcharge when the order ships by courier.
pub const COURIER_CHARGE: Rupees = Rupees::new(70);

/// Totals derived from an order form.
///
/// Always recomputed from the form; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: Rupees,
    pub courier_charge: Rupees,
    pub grand_total: Rupees,
}

impl ValueObject for InvoiceTotals {}

/// Compute subtotal, courier charge and grand total. Never fails.
pub fn compute_totals(form: &OrderForm) -> InvoiceTotals {
    let subtotal = unit_amount(form).times(quantity(form));
    let courier_charge = if form.courier_required.is_yes() {
        COURIER_CHARGE
    } else {
        Rupees::ZERO
    };

    InvoiceTotals {
        subtotal,
        courier_charge,
        grand_total: subtotal + courier_charge,
    }
}

/// Unit price as used by the totals: missing or non-numeric counts as 0.
pub fn unit_amount(form: &OrderForm) -> Rupees {
    Rupees::new(parse_int_prefix(&form.frame_amount).unwrap_or(0))
}

/// Quantity as used by the totals: missing, non-numeric or below 1 counts as 1.
pub fn quantity(form: &OrderForm) -> i64 {
    match parse_int_prefix(&form.quantity) {
        Some(n) if n >= 1 => n,
        _ => 1,
    }
}

/// Lenient integer parse of typed text.
///
/// Skips leading whitespace, accepts one sign, then reads leading ASCII
/// digits and ignores the rest (`"12abc"` is 12). `None` when no digit
/// follows. Out-of-range magnitudes saturate.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::YesNo;
    use proptest::prelude::*;

    fn form(amount: &str, quantity: &str, courier: YesNo) -> OrderForm {
        OrderForm {
            frame_amount: amount.to_string(),
            quantity: quantity.to_string(),
            courier_required: courier,
            ..OrderForm::default()
        }
    }

    #[test]
    fn courier_order_adds_flat_charge() {
        let totals = compute_totals(&form("500", "2", YesNo::Yes));
        assert_eq!(totals.subtotal, Rupees::new(1000));
        assert_eq!(totals.courier_charge, Rupees::new(70));
        assert_eq!(totals.grand_total, Rupees::new(1070));
    }

    #[test]
    fn pickup_order_has_no_courier_charge() {
        let totals = compute_totals(&form("350", "1", YesNo::No));
        assert_eq!(totals.courier_charge, Rupees::ZERO);
        assert_eq!(totals.grand_total, Rupees::new(350));
    }

    #[test]
    fn missing_numbers_fall_back_to_defaults() {
        let totals = compute_totals(&form("", "", YesNo::No));
        assert_eq!(totals.subtotal, Rupees::ZERO);

        let totals = compute_totals(&form("250", "abc", YesNo::No));
        assert_eq!(totals.subtotal, Rupees::new(250));

        let totals = compute_totals(&form("250", "0", YesNo::No));
        assert_eq!(totals.subtotal, Rupees::new(250));
    }

    #[test]
    fn lenient_parse_matches_typed_text() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  12abc"), Some(12));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("12.9"), Some(12));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn huge_amounts_saturate_instead_of_panicking() {
        let totals = compute_totals(&form("9223372036854775807", "3", YesNo::Yes));
        assert_eq!(totals.grand_total, Rupees::new(i64::MAX));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: subtotal is exactly amount × quantity for positive inputs.
        #[test]
        fn subtotal_is_amount_times_quantity(amount in 1i64..10_000_000, qty in 1i64..10_000) {
            let totals = compute_totals(&form(&amount.to_string(), &qty.to_string(), YesNo::No));
            prop_assert_eq!(totals.subtotal.amount(), amount * qty);
        }

        /// Property: grand total is subtotal plus the courier charge, for any text.
        #[test]
        fn grand_total_adds_courier_charge(
            amount in ".{0,12}",
            qty in ".{0,6}",
            courier in prop_oneof![Just(YesNo::Yes), Just(YesNo::No)],
        ) {
            let totals = compute_totals(&form(&amount, &qty, courier));
            let expected_charge = if courier.is_yes() { 70 } else { 0 };
            prop_assert_eq!(totals.courier_charge.amount(), expected_charge);
            prop_assert_eq!(totals.grand_total, totals.subtotal + totals.courier_charge);
        }
    }
}
