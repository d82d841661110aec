//! Transfer ledger
//!
//! This module provides the `Ledger`, which owns the account registry and
//! enforces the transfer rules:
//! - `queue_transfer` appends a request to the source account's queue and
//!   never touches balances
//! - `settle` drains one account's queue in queuing order, applies every
//!   request the source can afford, and records each applied request in the
//!   source account's history
//!
//! Settlement is a batch apply, not a transaction. A request that cannot be
//! applied (insufficient funds, unknown destination, overflow) is dropped and
//! reported; the rest of the batch still runs, and the queue is always empty
//! afterward. Dropped requests are never re-queued.

use crate::core::traits::{Clock, SystemClock, TransferEngine};
use crate::types::{
    Account, AccountNumber, CompletedTransfer, LedgerError, RejectedTransfer, SettlementReport,
    TransferRequest,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// In-memory account registry with deferred transfers
///
/// The registry is fixed when the ledger is built: accounts are neither
/// created nor removed afterward.
#[derive(Debug, Clone)]
pub struct Ledger<C = SystemClock> {
    /// Map of account numbers to accounts
    accounts: HashMap<AccountNumber, Account>,
    clock: C,
}

impl Ledger<SystemClock> {
    /// Build a ledger over a fixed set of accounts using wall-clock time
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two accounts share an account number
    /// - A seeded pending transfer has a non-positive amount
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Result<Self, LedgerError> {
        Self::with_clock(accounts, SystemClock)
    }
}

impl<C: Clock> Ledger<C> {
    /// Build a ledger that takes its timestamps from `clock`
    pub fn with_clock(
        accounts: impl IntoIterator<Item = Account>,
        clock: C,
    ) -> Result<Self, LedgerError> {
        let mut registry = HashMap::new();

        for account in accounts {
            if let Some(request) = account.pending().iter().find(|r| r.amount <= Decimal::ZERO) {
                return Err(LedgerError::invalid_amount(request.amount));
            }
            if registry.contains_key(&account.number) {
                return Err(LedgerError::duplicate_account(account.number));
            }
            registry.insert(account.number, account);
        }

        Ok(Ledger {
            accounts: registry,
            clock,
        })
    }

    /// Look up an account
    pub fn account(&self, number: AccountNumber) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&number)
            .ok_or_else(|| LedgerError::account_not_found(number))
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&number)
            .ok_or_else(|| LedgerError::account_not_found(number))
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    /// All accounts sorted by account number
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.number);
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of every account balance
    ///
    /// Settlement never changes this value.
    pub fn total_balance(&self) -> Decimal {
        self.accounts.values().map(Account::balance).sum()
    }

    /// Account numbers whose holder's first name contains `fragment`,
    /// ignoring case, in ascending order
    pub fn find_by_first_name(&self, fragment: &str) -> Vec<AccountNumber> {
        let needle = fragment.to_lowercase();
        let mut matches: Vec<AccountNumber> = self
            .accounts
            .values()
            .filter(|account| account.first_name.to_lowercase().contains(&needle))
            .map(|account| account.number)
            .collect();
        matches.sort_unstable();
        matches
    }

    /// Queue a transfer from `source` to `destination`
    ///
    /// Only the source account and the amount are checked here. Whether the
    /// destination exists and whether the source can afford the transfer is
    /// decided when the source account is settled.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the source account is not in the registry
    /// - `InvalidAmount` if `amount` is zero or negative
    pub fn queue_transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<TransferRequest, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let request = TransferRequest {
            queued_at: self.clock.now(),
            source,
            destination,
            amount,
        };
        self.account_mut(source)?.push_pending(request.clone());

        info!(source, destination, amount = %amount, "Transfer queued");
        Ok(request)
    }

    /// Apply and clear the pending queue of `account`
    ///
    /// Requests are processed strictly in queuing order. Each one the source
    /// can afford is debited from the source, credited to the destination and
    /// appended to the source's history. The others are dropped and listed in
    /// the returned report.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if `account` is not in the registry. Failures
    /// of individual transfers are reported in the `SettlementReport`, not as
    /// an error.
    pub fn settle(&mut self, account: AccountNumber) -> Result<SettlementReport, LedgerError> {
        let pending = self.account_mut(account)?.take_pending();
        let mut report = SettlementReport::new(account);

        for request in pending {
            match self.apply(&request) {
                Ok(()) => {
                    let completed = CompletedTransfer {
                        request,
                        executed_at: self.clock.now(),
                    };
                    info!(
                        source = completed.request.source,
                        destination = completed.request.destination,
                        amount = %completed.request.amount,
                        "Transfer applied"
                    );
                    self.account_mut(account)?.push_history(completed.clone());
                    report.applied.push(completed);
                }
                Err(reason) => {
                    warn!(
                        source = request.source,
                        destination = request.destination,
                        amount = %request.amount,
                        %reason,
                        "Transfer dropped"
                    );
                    report.rejected.push(RejectedTransfer { request, reason });
                }
            }
        }

        debug!(
            account,
            applied = report.applied.len(),
            rejected = report.rejected.len(),
            "Settlement finished"
        );
        Ok(report)
    }

    /// Move `request.amount` from the source to the destination
    ///
    /// Either both balances change or neither does.
    fn apply(&mut self, request: &TransferRequest) -> Result<(), LedgerError> {
        if !self.contains(request.destination) {
            return Err(LedgerError::account_not_found(request.destination));
        }

        let balance = self.account(request.source)?.balance();
        if balance < request.amount {
            return Err(LedgerError::insufficient_funds(
                request.source,
                balance,
                request.amount,
            ));
        }

        // Debit then credit of the same account leaves it unchanged
        if request.source == request.destination {
            return Ok(());
        }

        let debited = balance
            .checked_sub(request.amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("debit", request.source))?;
        let credited = self
            .account(request.destination)?
            .balance()
            .checked_add(request.amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", request.destination))?;

        self.account_mut(request.source)?.set_balance(debited);
        self.account_mut(request.destination)?.set_balance(credited);
        Ok(())
    }
}

impl<C: Clock> TransferEngine for Ledger<C> {
    fn queue_transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<TransferRequest, LedgerError> {
        Ledger::queue_transfer(self, source, destination, amount)
    }

    fn settle(&mut self, account: AccountNumber) -> Result<SettlementReport, LedgerError> {
        Ledger::settle(self, account)
    }

    fn contains(&self, account: AccountNumber) -> bool {
        Ledger::contains(self, account)
    }

    fn snapshot(&self) -> Vec<Account> {
        self.accounts().into_iter().cloned().collect()
    }
}
