use crate::driver::TransferPolicy;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Queue and settle transfers against an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "transfer-ledger")]
#[command(about = "Queue and settle transfers against an in-memory ledger", long_about = None)]
pub struct CliArgs {
    /// Command CSV file path
    #[arg(value_name = "INPUT", help = "Path to the command CSV file")]
    pub input_file: PathBuf,

    /// Account registry CSV file path
    #[arg(
        long = "accounts",
        value_name = "PATH",
        help = "Account registry CSV (default: built-in demo accounts 1001-1003)"
    )]
    pub accounts_file: Option<PathBuf>,

    /// Minimum amount accepted for a queued transfer
    #[arg(
        long = "min-amount",
        value_name = "AMOUNT",
        allow_hyphen_values = true,
        help = "Minimum transfer amount, inclusive (default: 50)"
    )]
    pub min_amount: Option<Decimal>,

    /// Report written to stdout after all commands are applied
    #[arg(long = "report", value_name = "REPORT", default_value = "accounts")]
    pub report: ReportKind,

    /// Output format for the accounts report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Accounts report format; the history report is always CSV"
    )]
    pub format: ReportFormat,
}

/// Reports available after processing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// One row per account with its balance
    #[default]
    Accounts,
    /// One row per completed transfer
    History,
}

/// Output formats for the accounts report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Text,
}

impl CliArgs {
    /// Reject option combinations clap cannot express on its own
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.report == ReportKind::History && self.format == ReportFormat::Text {
            return Err(CliArgs::command().error(
                ErrorKind::ArgumentConflict,
                "--format text applies only to the accounts report; the history report is CSV",
            ));
        }
        Ok(())
    }

    /// Create a TransferPolicy from CLI arguments
    ///
    /// Falls back to the default minimum when none is given; a non-positive
    /// minimum is replaced by the default with a warning.
    pub fn to_policy(&self) -> TransferPolicy {
        match self.min_amount {
            Some(min_amount) => TransferPolicy::new(min_amount),
            None => TransferPolicy::default(),
        }
    }
}
