//! Core traits for the ledger
//!
//! This module defines the trait abstractions that let the single-threaded
//! `Ledger` and the thread-safe `SharedLedger` be driven interchangeably,
//! and that let tests pin the timestamps the engine records.

use crate::types::{Account, AccountNumber, LedgerError, SettlementReport, TransferRequest};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Source of timestamps for queued and executed transfers
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Trait for queuing and settling transfers
///
/// Implemented by the plain `Ledger` (exclusive access) and by
/// `SharedLedger` (serialized access from many threads). The command driver
/// runs through this trait, so either can back a run.
pub trait TransferEngine {
    /// Append a pending transfer to the source account's queue
    fn queue_transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<TransferRequest, LedgerError>;

    /// Apply and clear an account's pending queue
    fn settle(&mut self, account: AccountNumber) -> Result<SettlementReport, LedgerError>;

    /// Whether `account` is in the registry
    fn contains(&self, account: AccountNumber) -> bool;

    /// Snapshot of all accounts, sorted by account number
    fn snapshot(&self) -> Vec<Account>;
}
