//! Command-line front end for the invoice generator.

pub mod commands;
pub mod config;
pub mod order_file;

pub use commands::{Cli, Command, Outcome, run};
pub use config::{Config, ConfigError};
pub use order_file::{OrderFileError, load_session};
