//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records and identifiers
//! - `transfer`: Pending and completed transfer records
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod transfer;

pub use account::{Account, AccountNumber};
pub use error::LedgerError;
pub use transfer::{
    CompletedTransfer, RejectedTransfer, SettlementReport, TransferRequest, TIMESTAMP_FORMAT,
};
