//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `command_reader` - Streaming reader over a command file
//! - `registry_reader` - Loads the account registry from a CSV file

pub mod command_reader;
pub mod csv_format;
pub mod registry_reader;

pub use command_reader::CommandReader;
pub use csv_format::{
    convert_account_record, convert_command_record, write_accounts_csv, write_accounts_text,
    write_history_csv, AccountRecord, CommandRecord, LedgerCommand,
};
pub use registry_reader::read_accounts;
