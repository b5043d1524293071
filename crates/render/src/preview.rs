//! Plain-text invoice preview for the terminal.

use std::fmt;

use snapzone_invoicing::{BusinessProfile, Invoice};

const LABEL_WIDTH: usize = 18;

/// Borrowed view of an invoice that displays as a text preview.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    invoice: &'a Invoice,
    profile: &'a BusinessProfile,
}

pub fn preview<'a>(invoice: &'a Invoice, profile: &'a BusinessProfile) -> Preview<'a> {
    Preview { invoice, profile }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {:<width$}{value}", format!("{label}:"), width = LABEL_WIDTH)
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let invoice = self.invoice;
        let customer = &invoice.customer;
        let frame = &invoice.frame;
        let totals = &invoice.totals;

        writeln!(f, "{}", self.profile.company_name)?;
        writeln!(f, "{}", self.profile.tagline)?;
        writeln!(f, "Invoice #{}", invoice.order_number)?;
        writeln!(f, "Date: {}", invoice.display_date())?;

        writeln!(f)?;
        writeln!(f, "Customer Information")?;
        row(f, "Name", &customer.name)?;
        if let Some(phone) = &customer.phone {
            row(f, "Phone", phone)?;
        }
        if let Some(email) = &customer.email {
            row(f, "Email", email)?;
        }
        let mut address = customer.address.lines();
        row(f, "Address", address.next().unwrap_or_default())?;
        for line in address {
            writeln!(f, "  {:<width$}{line}", "", width = LABEL_WIDTH)?;
        }
        row(f, "Within Coimbatore", customer.within_coimbatore)?;

        writeln!(f)?;
        writeln!(f, "Service Details")?;
        row(f, "Frame Size", &frame.size)?;
        row(f, "Frame Type", frame.frame_type)?;
        row(f, "Quantity", frame.quantity)?;
        row(f, "Unit Price", frame.unit_amount)?;
        row(f, "Courier Required", invoice.courier_required)?;

        writeln!(f)?;
        row(f, "Subtotal", totals.subtotal)?;
        row(f, "Courier Charges", totals.courier_charge)?;
        write!(
            f,
            "  {:<width$}{}",
            "Grand Total:",
            totals.grand_total,
            width = LABEL_WIDTH
        )
    }
}
