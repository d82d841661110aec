//! Thread-safe ledger handle
//!
//! `SharedLedger` wraps one `Ledger` behind a single global lock. Every
//! `queue_transfer` and `settle` call runs with the lock held, so each
//! settlement batch is applied as a unit and concurrent settlements that
//! transfer into each other cannot deadlock: there is only one lock to take.
//!
//! Handles are cheap to clone; all clones see the same registry.

use crate::core::ledger::Ledger;
use crate::core::traits::{Clock, SystemClock, TransferEngine};
use crate::types::{Account, AccountNumber, LedgerError, SettlementReport, TransferRequest};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a ledger
#[derive(Debug)]
pub struct SharedLedger<C = SystemClock> {
    inner: Arc<Mutex<Ledger<C>>>,
}

impl<C> Clone for SharedLedger<C> {
    fn clone(&self) -> Self {
        SharedLedger {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedLedger<C> {
    pub fn new(ledger: Ledger<C>) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Queue a transfer; see [`Ledger::queue_transfer`]
    pub fn queue_transfer(
        &self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<TransferRequest, LedgerError> {
        self.inner.lock().queue_transfer(source, destination, amount)
    }

    /// Settle an account; see [`Ledger::settle`]
    pub fn settle(&self, account: AccountNumber) -> Result<SettlementReport, LedgerError> {
        self.inner.lock().settle(account)
    }

    /// Run a read-only closure against a consistent view of the ledger
    pub fn read<R>(&self, f: impl FnOnce(&Ledger<C>) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn total_balance(&self) -> Decimal {
        self.read(Ledger::total_balance)
    }

    pub fn snapshot(&self) -> Vec<Account> {
        self.read(|ledger| ledger.accounts().into_iter().cloned().collect())
    }
}

impl<C: Clock> TransferEngine for SharedLedger<C> {
    fn queue_transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<TransferRequest, LedgerError> {
        SharedLedger::queue_transfer(self, source, destination, amount)
    }

    fn settle(&mut self, account: AccountNumber) -> Result<SettlementReport, LedgerError> {
        SharedLedger::settle(self, account)
    }

    fn contains(&self, account: AccountNumber) -> bool {
        self.read(|ledger| ledger.contains(account))
    }

    fn snapshot(&self) -> Vec<Account> {
        SharedLedger::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn ledger() -> Ledger {
        Ledger::new(vec![
            Account::new(1, "Ann", "Lee", "1", Decimal::from(1000)),
            Account::new(2, "Ben", "Lee", "2", Decimal::from(1000)),
        ])
        .unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let shared = SharedLedger::new(ledger());
        let other = shared.clone();

        other.queue_transfer(1, 2, Decimal::from(250)).unwrap();
        shared.settle(1).unwrap();

        assert_eq!(
            other.read(|ledger| ledger.account(2).map(Account::balance)),
            Ok(Decimal::from(1250))
        );
    }

    #[test]
    fn test_cross_settlement_from_two_threads() {
        let shared = SharedLedger::new(ledger());
        let total = shared.total_balance();

        thread::scope(|scope| {
            for (source, destination) in [(1, 2), (2, 1)] {
                let handle = shared.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        handle
                            .queue_transfer(source, destination, Decimal::from(7))
                            .unwrap();
                        handle.settle(source).unwrap();
                    }
                });
            }
        });

        assert_eq!(shared.total_balance(), total);
        for account in shared.snapshot() {
            assert!(account.pending().is_empty());
        }
    }

    #[test]
    fn test_engine_trait_object() {
        let mut engine: Box<dyn TransferEngine> = Box::new(SharedLedger::new(ledger()));

        engine.queue_transfer(2, 1, Decimal::from(10)).unwrap();
        let report = engine.settle(2).unwrap();

        assert_eq!(report.applied.len(), 1);
        assert_eq!(engine.snapshot()[0].balance(), Decimal::from(1010));
    }

    #[test]
    fn test_shared_ledger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedLedger>();
    }
}
