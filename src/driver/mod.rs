//! Command driver
//!
//! The external caller of the ledger. It validates transfer requests
//! against the caller-side policy, applies commands in file order, and
//! writes the requested report.
//!
//! - `policy` - Caller-side validation of `(source, destination, amount)`
//! - `processor` - Command file processing and report output

pub mod policy;
pub mod processor;

pub use policy::TransferPolicy;
pub use processor::{CommandOutcome, CommandProcessor, RunSummary};
