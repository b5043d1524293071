//! The editing session that owns one order form.
//!
//! All changes go through [`SessionCommand`]s; the session records which
//! fields the last failed submission flagged and clears a flag as soon as
//! that field is edited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use snapzone_core::{Aggregate, DomainError, DomainResult, Event};

use crate::form::{FieldEdit, FormField, OrderForm};
use crate::invoice::Invoice;
use crate::totals::{InvoiceTotals, compute_totals};
use crate::validation::ValidationErrors;

/// Command: change one field to the given raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditField {
    pub field: FormField,
    pub value: String,
}

/// Command: start over with a blank form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetForm {
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCommand {
    EditField(EditField),
    /// Validate the form and, if it passes, prepare the invoice.
    Submit,
    Reset(ResetForm),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SessionEvent {
    FieldEdited(FieldEdit),
    ValidationFailed(ValidationErrors),
    InvoicePrepared(Invoice),
    FormReset { today: NaiveDate },
}

impl Event for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::FieldEdited(_) => "invoicing.session.field_edited",
            SessionEvent::ValidationFailed(_) => "invoicing.session.validation_failed",
            SessionEvent::InvoicePrepared(_) => "invoicing.session.invoice_prepared",
            SessionEvent::FormReset { .. } => "invoicing.session.form_reset",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// Session state: the form, its error marks, and the last prepared invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSession {
    form: OrderForm,
    marks: BTreeMap<FormField, String>,
    prepared: Option<Invoice>,
    version: u64,
}

impl InvoiceSession {
    /// Open a session with a blank form dated `today`.
    pub fn open(today: NaiveDate) -> Self {
        Self {
            form: OrderForm::new(today),
            marks: BTreeMap::new(),
            prepared: None,
            version: 0,
        }
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Totals of the current form, recomputed on every call.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.form)
    }

    /// Fields flagged by the last failed submission, with their messages.
    pub fn field_errors(&self) -> &BTreeMap<FormField, String> {
        &self.marks
    }

    pub fn is_marked(&self, field: FormField) -> bool {
        self.marks.contains_key(&field)
    }

    /// Invoice from the last successful submission, if the form has not
    /// changed since.
    pub fn prepared_invoice(&self) -> Option<&Invoice> {
        self.prepared.as_ref()
    }

    /// Convenience wrapper: edit a field by key.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) -> DomainResult<()> {
        self.execute(&SessionCommand::EditField(EditField {
            field,
            value: value.into(),
        }))
        .map(|_| ())
    }

    /// Convenience wrapper: submit and hand back the invoice or the errors.
    pub fn submit(&mut self) -> Result<Invoice, ValidationErrors> {
        let outcome = Invoice::prepare(&self.form);
        self.apply(&submission_event(&outcome));
        outcome
    }

    fn handle_edit(&self, cmd: &EditField) -> DomainResult<Vec<SessionEvent>> {
        let edit = FieldEdit::parse(cmd.field, &cmd.value)?;
        Ok(vec![SessionEvent::FieldEdited(edit)])
    }

    fn handle_submit(&self) -> Vec<SessionEvent> {
        vec![submission_event(&Invoice::prepare(&self.form))]
    }
}

fn submission_event(outcome: &Result<Invoice, ValidationErrors>) -> SessionEvent {
    match outcome {
        Ok(invoice) => SessionEvent::InvoicePrepared(invoice.clone()),
        Err(errors) => SessionEvent::ValidationFailed(errors.clone()),
    }
}

impl Aggregate for InvoiceSession {
    type Command = SessionCommand;
    type Event = SessionEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SessionEvent::FieldEdited(edit) => {
                self.form.assign(edit);
                self.marks.remove(&edit.field());
                self.prepared = None;
            }
            SessionEvent::ValidationFailed(errors) => {
                self.marks = errors
                    .iter()
                    .map(|e| (e.field(), e.to_string()))
                    .collect();
                self.prepared = None;
            }
            SessionEvent::InvoicePrepared(invoice) => {
                self.marks.clear();
                self.prepared = Some(invoice.clone());
            }
            SessionEvent::FormReset { today } => {
                self.form = OrderForm::new(*today);
                self.marks.clear();
                self.prepared = None;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            SessionCommand::EditField(cmd) => self.handle_edit(cmd),
            SessionCommand::Submit => Ok(self.handle_submit()),
            SessionCommand::Reset(cmd) => Ok(vec![SessionEvent::FormReset { today: cmd.today }]),
        }
    }

    fn version(&self) -> u64 {
        self.version
    }
}
