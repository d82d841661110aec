//! Command file processing
//!
//! `CommandProcessor` plays the part of the interactive caller: each
//! `queue` command is validated against the `TransferPolicy` before it
//! reaches the ledger, and each `settle` command runs a settlement batch.
//! Any `TransferEngine` can back a run, so the same command file can drive a
//! plain `Ledger` or a `SharedLedger` handle.
//!
//! # Error Handling
//!
//! Fatal errors (file not found, I/O errors, report write failures) are
//! returned immediately. Malformed rows, policy rejections and dropped
//! transfers are logged and processing continues with the next command.

use crate::cli::{ReportFormat, ReportKind};
use crate::core::TransferEngine;
use crate::driver::policy::TransferPolicy;
use crate::io::command_reader::CommandReader;
use crate::io::csv_format::{
    write_accounts_csv, write_accounts_text, write_history_csv, LedgerCommand,
};
use crate::types::{Account, LedgerError, SettlementReport, TransferRequest};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Queued(TransferRequest),
    Settled(SettlementReport),
}

/// Counters for one run over a command file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that reached the ledger and succeeded
    pub commands_applied: usize,
    /// Rows that were malformed or rejected before or by the ledger
    pub commands_rejected: usize,
    /// Transfers applied across all settlements
    pub transfers_applied: usize,
    /// Transfers dropped across all settlements
    pub transfers_dropped: usize,
}

/// Applies command files to a ledger and writes reports
#[derive(Debug, Clone, Default)]
pub struct CommandProcessor {
    policy: TransferPolicy,
    report: ReportKind,
    format: ReportFormat,
}

impl CommandProcessor {
    pub fn new(policy: TransferPolicy, report: ReportKind, format: ReportFormat) -> Self {
        CommandProcessor {
            policy,
            report,
            format,
        }
    }

    pub fn policy(&self) -> &TransferPolicy {
        &self.policy
    }

    /// Apply a single command
    ///
    /// `queue` commands are validated against the policy first; `settle`
    /// commands go straight to the ledger.
    pub fn apply<E: TransferEngine + ?Sized>(
        &self,
        engine: &mut E,
        command: LedgerCommand,
    ) -> Result<CommandOutcome, LedgerError> {
        match command {
            LedgerCommand::Queue {
                source,
                destination,
                amount,
            } => {
                self.policy.validate(&*engine, source, destination, amount)?;
                let request = engine.queue_transfer(source, destination, amount)?;
                Ok(CommandOutcome::Queued(request))
            }
            LedgerCommand::Settle { account } => {
                engine.settle(account).map(CommandOutcome::Settled)
            }
        }
    }

    /// Apply every command in `input`, then write the report to `output`
    pub fn run<E: TransferEngine + ?Sized>(
        &self,
        engine: &mut E,
        input: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, LedgerError> {
        let reader = CommandReader::new(input)?;
        let mut summary = RunSummary::default();

        for result in reader {
            let outcome = result.and_then(|command| self.apply(&mut *engine, command));
            match outcome {
                Ok(CommandOutcome::Queued(_)) => summary.commands_applied += 1,
                Ok(CommandOutcome::Settled(report)) => {
                    summary.commands_applied += 1;
                    summary.transfers_applied += report.applied.len();
                    summary.transfers_dropped += report.rejected.len();
                }
                Err(e) => {
                    warn!(error = %e, "Command rejected");
                    summary.commands_rejected += 1;
                }
            }
        }

        debug!(?summary, "Command file processed");
        self.write_report(&*engine, output)?;
        Ok(summary)
    }

    /// Write the configured report for the current ledger state
    ///
    /// The history report is CSV only; `format` applies to the accounts
    /// report.
    pub fn write_report<E: TransferEngine + ?Sized>(
        &self,
        engine: &E,
        output: &mut dyn Write,
    ) -> Result<(), LedgerError> {
        let snapshot = engine.snapshot();
        let accounts: Vec<&Account> = snapshot.iter().collect();
        match (self.report, self.format) {
            (ReportKind::History, _) => write_history_csv(&accounts, output),
            (ReportKind::Accounts, ReportFormat::Csv) => write_accounts_csv(&accounts, output),
            (ReportKind::Accounts, ReportFormat::Text) => write_accounts_text(&accounts, output),
        }
    }
}
