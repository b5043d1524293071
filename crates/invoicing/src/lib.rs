//! Invoicing domain module for the frame shop.
//!
//! Pure, deterministic business rules (no IO, no rendering): the order form,
//! its validation and totals, phone-number input formatting, the validated
//! invoice snapshot, and the editing session that owns the form.

pub mod form;
pub mod invoice;
pub mod phone;
pub mod profile;
pub mod session;
pub mod totals;
pub mod validation;

pub use form::{FieldEdit, FormField, FrameType, OrderForm, YesNo};
pub use invoice::{Customer, FrameLine, Invoice};
pub use phone::{format_phone_input, is_valid_phone};
pub use profile::BusinessProfile;
pub use session::{EditField, InvoiceSession, ResetForm, SessionCommand, SessionEvent};
pub use totals::{COURIER_CHARGE, InvoiceTotals, compute_totals};
pub use validation::{ValidationError, ValidationErrors, validate};
