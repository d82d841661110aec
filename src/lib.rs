//! Transfer Ledger Library
//! # Overview
//!
//! This library provides an in-memory ledger of bank accounts where transfers
//! are queued first and applied later, in batches, per source account.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, TransferRequest, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account registry, queuing and settlement
//!   - [`core::shared`] - Thread-safe ledger handle
//! - [`driver`] - Caller-side validation and command file processing
//! - [`io`] - CSV command, registry and report handling
//! - [`cli`] - CLI arguments parsing
//!
//! # Transfer Lifecycle
//!
//! - **Queue**: a request is appended to the source account's pending queue.
//!   Balances do not change.
//! - **Settle**: the source account's queue is drained in order. Each request
//!   the source can afford moves funds and lands in the source's history;
//!   the rest are dropped. The queue is always empty afterward.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_ledger::{Account, Ledger};
//!
//! let mut ledger = Ledger::new(vec![
//!     Account::new(1, "Ann", "Lee", "A1", Decimal::from(100)),
//!     Account::new(2, "Ben", "Ray", "B2", Decimal::ZERO),
//! ])
//! .unwrap();
//!
//! ledger.queue_transfer(1, 2, Decimal::from(60)).unwrap();
//! ledger.queue_transfer(1, 2, Decimal::from(60)).unwrap();
//! let report = ledger.settle(1).unwrap();
//!
//! assert_eq!(report.applied.len(), 1);
//! assert_eq!(report.rejected.len(), 1);
//! assert_eq!(ledger.account(2).unwrap().balance(), Decimal::from(60));
//! ```

pub mod cli;
pub mod core;
pub mod driver;
pub mod io;
pub mod logging;
pub mod types;

pub use core::{Ledger, SharedLedger, TransferEngine};
pub use driver::{CommandProcessor, TransferPolicy};
pub use types::{
    Account, AccountNumber, CompletedTransfer, LedgerError, RejectedTransfer, SettlementReport,
    TransferRequest,
};
