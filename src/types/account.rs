//! Account-related types for the transfer ledger
//!
//! This module defines the Account structure held in the ledger registry.
//! Identity fields are public and opaque to the engine; the balance, the
//! pending queue and the history are only mutated through the ledger.

use super::transfer::{CompletedTransfer, TransferRequest};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Account identifier
///
/// Unique, assigned when the registry is built and never changed.
pub type AccountNumber = u32;

/// A bank account in the ledger registry
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Lookup key for the account
    pub number: AccountNumber,

    /// Holder's first name
    pub first_name: String,

    /// Holder's last name
    pub last_name: String,

    /// Holder's identity document number
    pub id_number: String,

    /// Current balance
    balance: Decimal,

    /// Transfers queued by this account, in queuing order
    ///
    /// Every request in here has `source == number`.
    pending: Vec<TransferRequest>,

    /// Transfers applied by this account, in completion order
    history: Vec<CompletedTransfer>,
}

impl Account {
    /// Create an account with an empty queue and no history
    pub fn new(
        number: AccountNumber,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id_number: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Account {
            number,
            first_name: first_name.into(),
            last_name: last_name.into(),
            id_number: id_number.into(),
            balance,
            pending: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Seed a pending transfer originating from this account
    ///
    /// Used when building a registry that already carries queued work.
    /// The source of the request is always this account.
    pub fn with_pending_transfer(
        mut self,
        queued_at: DateTime<Utc>,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Self {
        self.pending.push(TransferRequest {
            queued_at,
            source: self.number,
            destination,
            amount,
        });
        self
    }

    /// Seed a history entry for a transfer this account already executed
    pub fn with_completed_transfer(
        mut self,
        queued_at: DateTime<Utc>,
        destination: AccountNumber,
        amount: Decimal,
        executed_at: DateTime<Utc>,
    ) -> Self {
        self.history.push(CompletedTransfer {
            request: TransferRequest {
                queued_at,
                source: self.number,
                destination,
                amount,
            },
            executed_at,
        });
        self
    }

    /// Holder's full name, "first last"
    pub fn holder_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn pending(&self) -> &[TransferRequest] {
        &self.pending
    }

    pub fn history(&self) -> &[CompletedTransfer] {
        &self.history
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    pub(crate) fn push_pending(&mut self, request: TransferRequest) {
        self.pending.push(request);
    }

    /// Remove the whole pending queue, leaving it empty
    pub(crate) fn take_pending(&mut self) -> Vec<TransferRequest> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn push_history(&mut self, completed: CompletedTransfer) {
        self.history.push(completed);
    }
}
