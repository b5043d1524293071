use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use snapzone_core::{DomainError, DomainResult, ValueObject};

use crate::phone::format_phone_input;

/// Identifies one input of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    OrderNumber,
    OrderDate,
    CustomerName,
    Phone,
    Email,
    Address,
    WithinCoimbatore,
    CourierRequired,
    FrameSize,
    FrameType,
    FrameAmount,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::OrderNumber,
        FormField::OrderDate,
        FormField::CustomerName,
        FormField::Phone,
        FormField::Email,
        FormField::Address,
        FormField::WithinCoimbatore,
        FormField::CourierRequired,
        FormField::FrameSize,
        FormField::FrameType,
        FormField::FrameAmount,
        FormField::Quantity,
    ];

    /// Fields that must be non-blank, in the order they are checked.
    pub const REQUIRED: [FormField; 6] = [
        FormField::OrderNumber,
        FormField::OrderDate,
        FormField::CustomerName,
        FormField::Address,
        FormField::FrameSize,
        FormField::FrameAmount,
    ];

    /// Stable key used in order files.
    pub fn key(self) -> &'static str {
        match self {
            FormField::OrderNumber => "orderNumber",
            FormField::OrderDate => "orderDate",
            FormField::CustomerName => "customerName",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Address => "address",
            FormField::WithinCoimbatore => "withinCoimbatore",
            FormField::CourierRequired => "courierRequired",
            FormField::FrameSize => "frameSize",
            FormField::FrameType => "frameType",
            FormField::FrameAmount => "frameAmount",
            FormField::Quantity => "quantity",
        }
    }

    /// Human-readable label, as printed in error messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::OrderNumber => "Order Number",
            FormField::OrderDate => "Order Date",
            FormField::CustomerName => "Customer Name",
            FormField::Phone => "Phone Number",
            FormField::Email => "Email Address",
            FormField::Address => "Complete Address",
            FormField::WithinCoimbatore => "Within Coimbatore",
            FormField::CourierRequired => "Courier Required",
            FormField::FrameSize => "Frame Size",
            FormField::FrameType => "Frame Type",
            FormField::FrameAmount => "Frame Amount",
            FormField::Quantity => "Quantity",
        }
    }
}

impl core::fmt::Display for FormField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown form field: {s}")))
    }
}

/// Answer of a Yes/No select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl core::fmt::Display for YesNo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            other => Err(DomainError::validation(format!(
                "expected Yes or No, got {other:?}"
            ))),
        }
    }
}

/// Frame finish offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameType {
    #[default]
    Standard,
    Premium,
    Luxury,
    Custom,
}

impl FrameType {
    pub const ALL: [FrameType; 4] = [
        FrameType::Standard,
        FrameType::Premium,
        FrameType::Luxury,
        FrameType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::Standard => "Standard",
            FrameType::Premium => "Premium",
            FrameType::Luxury => "Luxury",
            FrameType::Custom => "Custom",
        }
    }
}

impl core::fmt::Display for FrameType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FrameType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "frame type must be one of Standard, Premium, Luxury, Custom; got {wanted:?}"
                ))
            })
    }
}

/// Raw contents of the order form, exactly as typed.
///
/// Numeric inputs stay text here: totals parse them leniently and validation
/// reports what is wrong with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderForm {
    pub order_number: String,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub order_date: String,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub within_coimbatore: YesNo,
    pub courier_required: YesNo,
    pub frame_size: String,
    pub frame_type: FrameType,
    pub frame_amount: String,
    pub quantity: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            order_date: String::new(),
            customer_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            within_coimbatore: YesNo::Yes,
            courier_required: YesNo::No,
            frame_size: String::new(),
            frame_type: FrameType::Standard,
            frame_amount: String::new(),
            quantity: "1".to_string(),
        }
    }
}

impl ValueObject for OrderForm {}

impl OrderForm {
    /// A blank form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            order_date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Current text of a field (selects render as their option label).
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::OrderNumber => self.order_number.clone(),
            FormField::OrderDate => self.order_date.clone(),
            FormField::CustomerName => self.customer_name.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Email => self.email.clone(),
            FormField::Address => self.address.clone(),
            FormField::WithinCoimbatore => self.within_coimbatore.to_string(),
            FormField::CourierRequired => self.courier_required.to_string(),
            FormField::FrameSize => self.frame_size.clone(),
            FormField::FrameType => self.frame_type.to_string(),
            FormField::FrameAmount => self.frame_amount.clone(),
            FormField::Quantity => self.quantity.clone(),
        }
    }

    /// Store an already-normalized edit.
    pub fn assign(&mut self, edit: &FieldEdit) {
        match edit {
            FieldEdit::OrderNumber(v) => self.order_number = v.clone(),
            FieldEdit::OrderDate(v) => self.order_date = v.clone(),
            FieldEdit::CustomerName(v) => self.customer_name = v.clone(),
            FieldEdit::Phone(v) => self.phone = v.clone(),
            FieldEdit::Email(v) => self.email = v.clone(),
            FieldEdit::Address(v) => self.address = v.clone(),
            FieldEdit::WithinCoimbatore(v) => self.within_coimbatore = *v,
            FieldEdit::CourierRequired(v) => self.courier_required = *v,
            FieldEdit::FrameSize(v) => self.frame_size = v.clone(),
            FieldEdit::FrameType(v) => self.frame_type = *v,
            FieldEdit::FrameAmount(v) => self.frame_amount = v.clone(),
            FieldEdit::Quantity(v) => self.quantity = v.clone(),
        }
    }
}

/// A typed, normalized change to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldEdit {
    OrderNumber(String),
    OrderDate(String),
    CustomerName(String),
    Phone(String),
    Email(String),
    Address(String),
    WithinCoimbatore(YesNo),
    CourierRequired(YesNo),
    FrameSize(String),
    FrameType(FrameType),
    FrameAmount(String),
    Quantity(String),
}

impl FieldEdit {
    /// Turn raw input for `field` into an edit.
    ///
    /// Select fields must name one of their options; the phone field is passed
    /// through `format_phone_input`. Free-text fields are kept verbatim.
    pub fn parse(field: FormField, raw: &str) -> DomainResult<Self> {
        let text = raw.to_string();
        Ok(match field {
            FormField::OrderNumber => FieldEdit::OrderNumber(text),
            FormField::OrderDate => FieldEdit::OrderDate(text),
            FormField::CustomerName => FieldEdit::CustomerName(text),
            FormField::Phone => FieldEdit::Phone(format_phone_input(raw)),
            FormField::Email => FieldEdit::Email(text),
            FormField::Address => FieldEdit::Address(text),
            FormField::WithinCoimbatore => FieldEdit::WithinCoimbatore(select(field, raw)?),
            FormField::CourierRequired => FieldEdit::CourierRequired(select(field, raw)?),
            FormField::FrameSize => FieldEdit::FrameSize(text),
            FormField::FrameType => FieldEdit::FrameType(select(field, raw)?),
            FormField::FrameAmount => FieldEdit::FrameAmount(text),
            FormField::Quantity => FieldEdit::Quantity(text),
        })
    }

    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::OrderNumber(_) => FormField::OrderNumber,
            FieldEdit::OrderDate(_) => FormField::OrderDate,
            FieldEdit::CustomerName(_) => FormField::CustomerName,
            FieldEdit::Phone(_) => FormField::Phone,
            FieldEdit::Email(_) => FormField::Email,
            FieldEdit::Address(_) => FormField::Address,
            FieldEdit::WithinCoimbatore(_) => FormField::WithinCoimbatore,
            FieldEdit::CourierRequired(_) => FormField::CourierRequired,
            FieldEdit::FrameSize(_) => FormField::FrameSize,
            FieldEdit::FrameType(_) => FormField::FrameType,
            FieldEdit::FrameAmount(_) => FormField::FrameAmount,
            FieldEdit::Quantity(_) => FormField::Quantity,
        }
    }
}

fn select<T: FromStr<Err = DomainError>>(field: FormField, raw: &str) -> DomainResult<T> {
    raw.parse().map_err(|DomainError::Validation(msg)| {
        DomainError::validation(format!("{}: {msg}", field.label()))
    })
}
