//! `snapzone-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod aggregate;
pub mod error;
pub mod money;
pub mod value_object;

pub use aggregate::{Aggregate, Event};
pub use error::{DomainError, DomainResult};
pub use money::Rupees;
pub use value_object::ValueObject;
