//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Clock and engine abstractions
//! - `ledger` - Account registry, transfer queuing and settlement
//! - `shared` - Thread-safe handle serializing access to one ledger
//! - `demo` - Built-in demo registry

pub mod demo;
pub mod ledger;
pub mod shared;
pub mod traits;

pub use demo::demo_accounts;
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use traits::{Clock, FixedClock, SystemClock, TransferEngine};
