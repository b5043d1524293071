use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use snapzone_core::{Rupees, ValueObject};

use crate::form::{FrameType, OrderForm, YesNo};
use crate::totals::{self, InvoiceTotals, compute_totals};
use crate::validation::{ValidationErrors, validate};

/// Customer block of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub within_coimbatore: YesNo,
}

/// The single billed service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLine {
    pub size: String,
    pub frame_type: FrameType,
    pub unit_amount: Rupees,
    pub quantity: i64,
}

impl FrameLine {
    pub fn description(&self) -> String {
        format!("{} Frame", self.frame_type)
    }
}

/// Validated snapshot of an order, ready to preview or render.
///
/// Only obtainable through [`Invoice::prepare`], so holding one means the form
/// passed validation when it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub order_number: String,
    /// ISO 8601 date as entered.
    pub order_date: String,
    pub customer: Customer,
    pub frame: FrameLine,
    pub courier_required: YesNo,
    pub totals: InvoiceTotals,
}

impl ValueObject for Invoice {}

impl Invoice {
    /// Validate `form` and, if it passes, take a trimmed snapshot with totals.
    ///
    /// Nothing is produced for an invalid form.
    pub fn prepare(form: &OrderForm) -> Result<Self, ValidationErrors> {
        if let Some(errors) = ValidationErrors::from_vec(validate(form)) {
            return Err(errors);
        }

        Ok(Self {
            order_number: form.order_number.trim().to_string(),
            order_date: form.order_date.trim().to_string(),
            customer: Customer {
                name: form.customer_name.trim().to_string(),
                phone: non_blank(&form.phone),
                email: non_blank(&form.email),
                address: form.address.trim().to_string(),
                within_coimbatore: form.within_coimbatore,
            },
            frame: FrameLine {
                size: form.frame_size.trim().to_string(),
                frame_type: form.frame_type,
                unit_amount: totals::unit_amount(form),
                quantity: totals::quantity(form),
            },
            courier_required: form.courier_required,
            totals: compute_totals(form),
        })
    }

    /// `Snapzone_Invoice_<order number>_<customer name>.pdf`.
    ///
    /// Whitespace runs in the name become one underscore; path separators in
    /// either part become `-`.
    pub fn file_name(&self) -> String {
        let customer = self
            .customer
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!(
            "Snapzone_Invoice_{}_{}.pdf",
            strip_separators(&self.order_number),
            strip_separators(&customer)
        )
    }

    /// Order date as the `en-IN` locale prints it (`17/10/2026`).
    ///
    /// A date that does not parse is shown as entered.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.order_date, "%Y-%m-%d") {
            Ok(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
            Err(_) => self.order_date.clone(),
        }
    }

    pub fn location_label(&self) -> &'static str {
        if self.customer.within_coimbatore.is_yes() {
            "Within Coimbatore"
        } else {
            "Outside Coimbatore"
        }
    }

    pub fn has_courier(&self) -> bool {
        self.courier_required.is_yes()
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn strip_separators(part: &str) -> String {
    part.replace(['/', '\\'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::validation::ValidationError;

    fn valid_form() -> OrderForm {
        OrderForm {
            order_number: " ORD-7 ".to_string(),
            order_date: "2026-01-05".to_string(),
            customer_name: "Priya  Raman".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "12 Race Course Road\nCoimbatore".to_string(),
            frame_size: "8x10".to_string(),
            frame_type: FrameType::Luxury,
            frame_amount: "500".to_string(),
            quantity: "2".to_string(),
            courier_required: YesNo::Yes,
            ..OrderForm::default()
        }
    }

    #[test]
    fn prepare_snapshots_valid_form() {
        let invoice = Invoice::prepare(&valid_form()).unwrap();
        assert_eq!(invoice.order_number, "ORD-7");
        assert_eq!(invoice.customer.phone.as_deref(), Some("+91 98765 43210"));
        assert_eq!(invoice.customer.email, None);
        assert_eq!(invoice.frame.description(), "Luxury Frame");
        assert_eq!(invoice.frame.unit_amount, Rupees::new(500));
        assert_eq!(invoice.frame.quantity, 2);
        assert_eq!(invoice.totals.grand_total, Rupees::new(1070));
        assert!(invoice.has_courier());
        assert_eq!(invoice.location_label(), "Within Coimbatore");
    }

    #[test]
    fn prepare_refuses_invalid_form() {
        let form = OrderForm {
            frame_size: String::new(),
            ..valid_form()
        };
        let errors = Invoice::prepare(&form).unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &[ValidationError::MissingField(FormField::FrameSize)]
        );
    }

    #[test]
    fn file_name_joins_order_and_customer() {
        let invoice = Invoice::prepare(&valid_form()).unwrap();
        assert_eq!(invoice.file_name(), "Snapzone_Invoice_ORD-7_Priya_Raman.pdf");
    }

    #[test]
    fn file_name_never_contains_path_separators() {
        let form = OrderForm {
            order_number: "2026/10/001".to_string(),
            customer_name: "A\\B".to_string(),
            ..valid_form()
        };
        let invoice = Invoice::prepare(&form).unwrap();
        assert_eq!(invoice.file_name(), "Snapzone_Invoice_2026-10-001_A-B.pdf");
    }

    #[test]
    fn display_date_uses_indian_day_month_order() {
        let invoice = Invoice::prepare(&valid_form()).unwrap();
        assert_eq!(invoice.display_date(), "5/1/2026");

        let form = OrderForm {
            order_date: "next tuesday".to_string(),
            ..valid_form()
        };
        let invoice = Invoice::prepare(&form).unwrap();
        assert_eq!(invoice.display_date(), "next tuesday");
    }
}
