//! Account registry loading
//!
//! The registry must be complete before any command runs, so unlike the
//! command reader, any bad row aborts the load.

use crate::io::command_reader::{csv_reader, open, read_error, record_line};
use crate::io::csv_format::{convert_account_record, AccountRecord};
use crate::types::{Account, LedgerError};
use csv::StringRecord;
use std::path::Path;

/// Read every account from a registry CSV file
///
/// Columns: account, first_name, last_name, id_number, balance
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row is malformed.
/// Duplicate account numbers are detected when the ledger is built.
pub fn read_accounts(path: &Path) -> Result<Vec<Account>, LedgerError> {
    let mut reader = csv_reader(open(path)?);
    let headers = reader.headers().map_err(read_error)?.clone();
    let mut row = StringRecord::new();
    let mut accounts = Vec::new();

    while reader.read_record(&mut row).map_err(read_error)? {
        let line = record_line(&row);
        let record: AccountRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| LedgerError::parse(line, e.to_string()))?;
        let account =
            convert_account_record(record).map_err(|message| LedgerError::parse(line, message))?;
        accounts.push(account);
    }

    Ok(accounts)
}
