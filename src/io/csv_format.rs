//! CSV format handling for commands, account registries and reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CommandRecord / AccountRecord structures for deserialization
//! - Conversion from CSV records to domain types
//! - Account and history report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Account, AccountNumber, LedgerError, TIMESTAMP_FORMAT};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Command file row
///
/// Columns: command, account, destination, amount. Destination and amount
/// are only used by `queue` and may be empty for `settle`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandRecord {
    pub command: String,
    pub account: AccountNumber,
    pub destination: Option<AccountNumber>,
    pub amount: Option<String>,
}

/// A parsed command, ready to be validated and applied
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Queue a transfer from `source` to `destination`
    Queue {
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    },
    /// Settle the pending queue of `account`
    Settle { account: AccountNumber },
}

/// Account registry row
///
/// Columns: account, first_name, last_name, id_number, balance
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountRecord {
    pub account: AccountNumber,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub balance: String,
}

fn parse_amount(text: &str) -> Result<Decimal, String> {
    Decimal::from_str(text.trim()).map_err(|_| format!("Invalid amount '{}'", text))
}

/// Convert a CommandRecord to a LedgerCommand
///
/// This function:
/// - Parses the command name (case-insensitive)
/// - Requires a destination and a parseable amount for `queue`
/// - Ignores destination and amount for `settle`
///
/// The sign of the amount is not checked here; that is a policy decision
/// left to the caller and the ledger.
pub fn convert_command_record(record: CommandRecord) -> Result<LedgerCommand, String> {
    match record.command.to_lowercase().as_str() {
        "queue" => {
            let destination = record.destination.ok_or_else(|| {
                format!("queue command for account {} requires a destination", record.account)
            })?;
            let amount = match record.amount {
                Some(text) if !text.trim().is_empty() => parse_amount(&text)?,
                _ => {
                    return Err(format!(
                        "queue command for account {} requires an amount",
                        record.account
                    ))
                }
            };
            Ok(LedgerCommand::Queue {
                source: record.account,
                destination,
                amount,
            })
        }
        "settle" => Ok(LedgerCommand::Settle {
            account: record.account,
        }),
        _ => Err(format!("Unknown command '{}'", record.command)),
    }
}

/// Convert an AccountRecord to an Account with an empty queue and history
pub fn convert_account_record(record: AccountRecord) -> Result<Account, String> {
    let balance = parse_amount(&record.balance)
        .map_err(|e| format!("{} for account {}", e, record.account))?;

    Ok(Account::new(
        record.account,
        record.first_name,
        record.last_name,
        record.id_number,
        balance,
    ))
}

fn sorted<'a>(accounts: &[&'a Account]) -> Vec<&'a Account> {
    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number);
    sorted_accounts
}

fn write_error(what: &str, e: impl std::fmt::Display) -> LedgerError {
    LedgerError::IoError {
        message: format!("Failed to write {}: {}", what, e),
    }
}

/// Write the account report in CSV format
///
/// Columns: account, first_name, last_name, balance, pending, history.
/// Balances have two decimal places; rows are sorted by account number.
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "account",
            "first_name",
            "last_name",
            "balance",
            "pending",
            "history",
        ])
        .map_err(|e| write_error("CSV header", e))?;

    for account in sorted(accounts) {
        writer
            .write_record(&[
                account.number.to_string(),
                account.first_name.clone(),
                account.last_name.clone(),
                format!("{:.2}", account.balance()),
                account.pending().len().to_string(),
                account.history().len().to_string(),
            ])
            .map_err(|e| write_error("account record", e))?;
    }

    writer.flush().map_err(|e| write_error("output", e))?;
    Ok(())
}

/// Write the account report as plain text, one line per account
pub fn write_accounts_text(
    accounts: &[&Account],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    for account in sorted(accounts) {
        writeln!(
            output,
            "Account {}: {} - Balance: {:.2}",
            account.number,
            account.holder_name(),
            account.balance()
        )
        .map_err(|e| write_error("account line", e))?;
    }
    output.flush().map_err(|e| write_error("output", e))?;
    Ok(())
}

/// Write every account's history in CSV format
///
/// Columns: account, queued_at, source, destination, amount, executed_at.
/// Accounts are in ascending order; entries keep their history order.
pub fn write_history_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "account",
            "queued_at",
            "source",
            "destination",
            "amount",
            "executed_at",
        ])
        .map_err(|e| write_error("CSV header", e))?;

    for account in sorted(accounts) {
        for completed in account.history() {
            let request = &completed.request;
            writer
                .write_record(&[
                    account.number.to_string(),
                    request.queued_at.format(TIMESTAMP_FORMAT).to_string(),
                    request.source.to_string(),
                    request.destination.to_string(),
                    format!("{:.2}", request.amount),
                    completed.executed_at.format(TIMESTAMP_FORMAT).to_string(),
                ])
                .map_err(|e| write_error("history record", e))?;
        }
    }

    writer.flush().map_err(|e| write_error("output", e))?;
    Ok(())
}
