//! Order form validation.

use serde::Serialize;
use thiserror::Error;

use crate::form::{FormField, OrderForm};
use crate::phone::is_valid_phone;
use crate::totals::parse_int_prefix;

/// One problem with the order form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Frame amount must be greater than 0")]
    InvalidAmount,
}

impl ValidationError {
    /// The field to mark for this error.
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidPhone => FormField::Phone,
            ValidationError::InvalidAmount => FormField::FrameAmount,
        }
    }
}

/// Check the form, collecting every failure in a fixed order.
///
/// 1. required fields, blank after trimming
/// 2. phone, when given, must be `+91 DDDDD DDDDD`
/// 3. frame amount, when given, must parse to more than 0
///
/// An empty result means the form is valid.
pub fn validate(form: &OrderForm) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = FormField::REQUIRED
        .into_iter()
        .filter(|field| form.value(*field).trim().is_empty())
        .map(ValidationError::MissingField)
        .collect();

    if !form.phone.is_empty() && !is_valid_phone(&form.phone) {
        errors.push(ValidationError::InvalidPhone);
    }

    let amount = form.frame_amount.trim();
    if !amount.is_empty() && !matches!(parse_int_prefix(amount), Some(n) if n > 0) {
        errors.push(ValidationError::InvalidAmount);
    }

    errors
}

/// Non-empty list of validation failures, reported as one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Please fix the following errors:\n")?;
        for error in &self.0 {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_form() -> OrderForm {
        OrderForm {
            order_number: "ORD-2026-001".to_string(),
            order_date: "2026-10-17".to_string(),
            customer_name: "Priya Raman".to_string(),
            address: "12 Race Course Road, Coimbatore 641018".to_string(),
            frame_size: "12x18".to_string(),
            frame_amount: "500".to_string(),
            ..OrderForm::default()
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn missing_name_and_address_reported_in_order() {
        let form = OrderForm {
            customer_name: String::new(),
            address: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            vec![
                ValidationError::MissingField(FormField::CustomerName),
                ValidationError::MissingField(FormField::Address),
            ]
        );
    }

    #[test]
    fn zero_amount_is_invalid() {
        let form = OrderForm {
            frame_amount: "0".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), vec![ValidationError::InvalidAmount]);
    }

    #[test]
    fn non_numeric_amount_is_invalid() {
        let form = OrderForm {
            frame_amount: "five hundred".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), vec![ValidationError::InvalidAmount]);
    }

    #[test]
    fn blank_amount_is_only_missing() {
        let form = OrderForm {
            frame_amount: " ".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            vec![ValidationError::MissingField(FormField::FrameAmount)]
        );
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        let mut form = valid_form();
        form.phone = "+91 98765 43210".to_string();
        assert!(validate(&form).is_empty());

        form.phone = "+91 98765".to_string();
        assert_eq!(validate(&form), vec![ValidationError::InvalidPhone]);
    }

    #[test]
    fn every_failure_is_accumulated() {
        let form = OrderForm {
            order_number: String::new(),
            phone: "12345".to_string(),
            frame_amount: "-3".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            vec![
                ValidationError::MissingField(FormField::OrderNumber),
                ValidationError::InvalidPhone,
                ValidationError::InvalidAmount,
            ]
        );
    }

    #[test]
    fn aggregated_message_lists_each_error() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::MissingField(FormField::CustomerName),
            ValidationError::InvalidAmount,
        ])
        .unwrap();
        assert_eq!(
            errors.to_string(),
            "Please fix the following errors:\n\nCustomer Name is required\nFrame amount must be greater than 0"
        );
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn errors_point_at_their_fields() {
        assert_eq!(ValidationError::InvalidPhone.field(), FormField::Phone);
        assert_eq!(ValidationError::InvalidAmount.field(), FormField::FrameAmount);
        assert_eq!(
            ValidationError::MissingField(FormField::FrameSize).field(),
            FormField::FrameSize
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: valid iff required fields are filled, phone (if any) matches,
        /// and the amount is positive.
        #[test]
        fn valid_iff_all_rules_hold(
            order_number in "( |[A-Z0-9-]{1,8})",
            customer_name in "( |[A-Za-z ]{1,12})",
            phone in "(|\\+91 [0-9]{5} [0-9]{5}|[0-9 +]{1,14})",
            amount in "(-?[0-9]{1,6}|[a-z]{1,4})",
        ) {
            let form = OrderForm {
                order_number: order_number.clone(),
                customer_name: customer_name.clone(),
                phone: phone.clone(),
                frame_amount: amount.clone(),
                ..valid_form()
            };

            let required_ok = !order_number.trim().is_empty() && !customer_name.trim().is_empty();
            let phone_ok = phone.is_empty() || is_valid_phone(&phone);
            let amount_ok = matches!(amount.parse::<i64>(), Ok(n) if n > 0);

            prop_assert_eq!(validate(&form).is_empty(), required_ok && phone_ok && amount_ok);
        }
    }
}
