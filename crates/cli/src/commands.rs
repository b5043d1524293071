//! Subcommands and their dispatch.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use snapzone_invoicing::{Invoice, InvoiceSession, OrderForm, format_phone_input};
use snapzone_observability::LogFormat;
use snapzone_render::{export_invoice, preview};

use crate::config::Config;
use crate::order_file::load_session;

#[derive(Parser, Debug)]
#[command(name = "snapzone")]
#[command(version, about = "Snapzone Frames invoice generator")]
pub struct Cli {
    /// Business profile (JSON); overrides SNAPZONE_PROFILE
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Log format: json or pretty; overrides SNAPZONE_LOG_FORMAT
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a blank order file dated today
    New,
    /// Print subtotal, courier charge and grand total
    Totals { order: PathBuf },
    /// Check an order and print its errors, or "ok"
    Validate { order: PathBuf },
    /// Print a text preview of a valid order
    Preview { order: PathBuf },
    /// Export a valid order as a PDF invoice
    Generate {
        order: PathBuf,
        /// Output directory; overrides SNAPZONE_OUTPUT_DIR
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print phone input as the form would format it
    FormatPhone { raw: String },
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    pub fn configure(&self, mut config: Config) -> Config {
        if let Some(profile) = &self.profile {
            config.profile_path = Some(profile.clone());
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Command::Generate {
            out_dir: Some(dir), ..
        } = &self.command
        {
            config.output_dir = dir.clone();
        }
        config
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The order failed validation; nothing was produced.
    Blocked,
}

/// Execute `command`, writing its output to `out`.
pub fn run(
    command: &Command,
    config: &Config,
    today: NaiveDate,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    match command {
        Command::New => {
            let form = OrderForm::new(today);
            writeln!(out, "{}", serde_json::to_string_pretty(&form)?)?;
            Ok(Outcome::Done)
        }
        Command::Totals { order } => {
            let totals = open(order, today)?.totals();
            writeln!(out, "Subtotal:        {}", totals.subtotal)?;
            writeln!(out, "Courier Charges: {}", totals.courier_charge)?;
            writeln!(out, "Grand Total:     {}", totals.grand_total)?;
            Ok(Outcome::Done)
        }
        Command::Validate { order } => match submit(order, today, out)? {
            Some(_) => {
                writeln!(out, "ok")?;
                Ok(Outcome::Done)
            }
            None => Ok(Outcome::Blocked),
        },
        Command::Preview { order } => {
            let Some(invoice) = submit(order, today, out)? else {
                return Ok(Outcome::Blocked);
            };
            let profile = config.load_profile()?;
            writeln!(out, "{}", preview(&invoice, &profile))?;
            Ok(Outcome::Done)
        }
        Command::Generate { order, .. } => {
            let Some(invoice) = submit(order, today, out)? else {
                return Ok(Outcome::Blocked);
            };
            let profile = config.load_profile()?;
            let path = export_invoice(&invoice, &profile, &config.output_dir)
                .context("invoice generation failed")?;
            writeln!(out, "{}", path.display())?;
            Ok(Outcome::Done)
        }
        Command::FormatPhone { raw } => {
            writeln!(out, "{}", format_phone_input(raw))?;
            Ok(Outcome::Done)
        }
    }
}

fn open(order: &Path, today: NaiveDate) -> anyhow::Result<InvoiceSession> {
    Ok(load_session(order, today)?)
}

/// Submit the order; on failure print the aggregated message and return `None`.
fn submit(order: &Path, today: NaiveDate, out: &mut impl Write) -> anyhow::Result<Option<Invoice>> {
    let mut session = open(order, today)?;
    match session.submit() {
        Ok(invoice) => Ok(Some(invoice)),
        Err(errors) => {
            tracing::warn!(
                order = %order.display(),
                errors = errors.len(),
                "order failed validation"
            );
            writeln!(out, "{errors}")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn run_to_string(command: &Command, config: &Config) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(command, config, today(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn order_file(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("order.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn cli_parses_generate_with_overrides() {
        let cli = Cli::parse_from([
            "snapzone",
            "generate",
            "order.json",
            "--out-dir",
            "out",
            "--profile",
            "shop.json",
            "--log-format",
            "pretty",
        ]);
        let config = cli.configure(Config::default());

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.profile_path, Some(PathBuf::from("shop.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn new_prints_a_loadable_blank_order() {
        let (outcome, text) = run_to_string(&Command::New, &Config::default());
        assert_eq!(outcome, Outcome::Done);

        let form: OrderForm = serde_json::from_str(&text).unwrap();
        assert_eq!(form, OrderForm::new(today()));
    }

    #[test]
    fn totals_are_printed_even_for_incomplete_orders() {
        let dir = tempfile::tempdir().unwrap();
        let order = order_file(
            dir.path(),
            r#"{ "frameAmount": 500, "quantity": 2, "courierRequired": "Yes" }"#,
        );

        let (outcome, text) = run_to_string(&Command::Totals { order }, &Config::default());

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            text,
            "Subtotal:        ₹1000\nCourier Charges: ₹70\nGrand Total:     ₹1070\n"
        );
    }

    #[test]
    fn validate_reports_aggregated_errors() {
        let dir = tempfile::tempdir().unwrap();
        let order = order_file(
            dir.path(),
            r#"{ "orderNumber": "1", "frameSize": "A4", "frameAmount": "0" }"#,
        );

        let (outcome, text) = run_to_string(&Command::Validate { order }, &Config::default());

        assert_eq!(outcome, Outcome::Blocked);
        assert_eq!(
            text,
            "Please fix the following errors:\n\n\
             Customer Name is required\n\
             Complete Address is required\n\
             Frame amount must be greater than 0\n"
        );
    }

    #[test]
    fn format_phone_prints_formatted_number() {
        let command = Command::FormatPhone {
            raw: "9876543210".to_string(),
        };
        let (_, text) = run_to_string(&command, &Config::default());
        assert_eq!(text, "+91 98765 43210\n");
    }

    #[test]
    fn missing_order_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::Totals {
            order: dir.path().join("absent.json"),
        };
        let mut out = Vec::new();
        assert!(run(&command, &Config::default(), today(), &mut out).is_err());
    }
}
