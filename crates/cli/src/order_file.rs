//! Order files: a JSON object of form fields, replayed into a session.
//!
//! Keys are the camelCase field names (`customerName`, `frameAmount`, ...).
//! Values may be strings or integers. Absent keys keep the session defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use snapzone_core::{Aggregate, DomainError};
use snapzone_invoicing::{EditField, FormField, InvoiceSession, SessionCommand};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderFileError {
    #[error("cannot read order file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid order file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown order field {0:?}")]
    UnknownField(String),

    #[error("rejected value for {field}: {source}")]
    Rejected {
        field: FormField,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Integer(i64),
}

impl From<FieldValue> for String {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => text,
            FieldValue::Integer(n) => n.to_string(),
        }
    }
}

/// Parse an order file into edit commands, in form order.
pub fn parse_order(json: &str) -> Result<Vec<EditField>, OrderFileError> {
    let mut values: BTreeMap<String, FieldValue> = serde_json::from_str(json)?;

    let edits = FormField::ALL
        .into_iter()
        .filter_map(|field| {
            values.remove(field.key()).map(|value| EditField {
                field,
                value: value.into(),
            })
        })
        .collect();

    match values.into_keys().next() {
        Some(unknown) => Err(OrderFileError::UnknownField(unknown)),
        None => Ok(edits),
    }
}

/// Open a session dated `today` and replay the order file at `path` into it.
pub fn load_session(path: &Path, today: NaiveDate) -> Result<InvoiceSession, OrderFileError> {
    let json = fs::read_to_string(path).map_err(|source| OrderFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut session = InvoiceSession::open(today);
    for edit in parse_order(&json)? {
        let field = edit.field;
        session
            .execute(&SessionCommand::EditField(edit))
            .map_err(|source| OrderFileError::Rejected { field, source })?;
    }
    Ok(session)
}
