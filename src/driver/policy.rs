//! Caller-side transfer validation
//!
//! The ledger only guarantees that it never stores a non-positive amount.
//! Everything else a user-facing caller enforces before queuing (both
//! accounts exist, the amount meets the minimum) lives here.

use crate::core::TransferEngine;
use crate::types::{AccountNumber, LedgerError};
use rust_decimal::Decimal;
use tracing::warn;

/// Minimum transfer amount when none is configured
pub const DEFAULT_MIN_AMOUNT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Rules a transfer must satisfy before it is queued
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPolicy {
    /// Smallest amount accepted, inclusive
    pub min_amount: Decimal,
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self {
            min_amount: DEFAULT_MIN_AMOUNT,
        }
    }
}

impl TransferPolicy {
    /// Create a policy with a custom minimum
    ///
    /// A non-positive minimum falls back to the default.
    pub fn new(min_amount: Decimal) -> Self {
        if min_amount <= Decimal::ZERO {
            warn!(
                %min_amount,
                default = %DEFAULT_MIN_AMOUNT,
                "Invalid minimum transfer amount, using default"
            );
            return Self::default();
        }
        Self { min_amount }
    }

    /// Check a transfer against the registry and the amount rules
    ///
    /// Checks run in this order: source exists, destination exists, amount
    /// positive, amount at least the minimum.
    pub fn validate<E: TransferEngine + ?Sized>(
        &self,
        engine: &E,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        for account in [source, destination] {
            if !engine.contains(account) {
                return Err(LedgerError::account_not_found(account));
            }
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        if amount < self.min_amount {
            return Err(LedgerError::below_minimum(amount, self.min_amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{demo_accounts, Ledger};
    use rstest::rstest;

    fn ledger() -> Ledger {
        Ledger::new(demo_accounts()).unwrap()
    }

    #[test]
    fn test_default_minimum_is_fifty() {
        assert_eq!(TransferPolicy::default().min_amount, Decimal::from(50));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::from(-1))]
    fn test_non_positive_minimum_falls_back(#[case] min_amount: Decimal) {
        assert_eq!(TransferPolicy::new(min_amount), TransferPolicy::default());
    }

    #[rstest]
    #[case::at_minimum(1001, 1002, Decimal::from(50), Ok(()))]
    #[case::above_minimum(1001, 1003, Decimal::new(7525, 2), Ok(()))]
    #[case::below_minimum(
        1001,
        1002,
        Decimal::from(49),
        Err(LedgerError::below_minimum(Decimal::from(49), Decimal::from(50)))
    )]
    #[case::zero(1001, 1002, Decimal::ZERO, Err(LedgerError::invalid_amount(Decimal::ZERO)))]
    #[case::unknown_source(
        1004,
        1002,
        Decimal::from(100),
        Err(LedgerError::account_not_found(1004))
    )]
    #[case::unknown_destination(
        1001,
        1004,
        Decimal::from(100),
        Err(LedgerError::account_not_found(1004))
    )]
    #[case::source_checked_first(
        2000,
        3000,
        Decimal::ZERO,
        Err(LedgerError::account_not_found(2000))
    )]
    fn test_validate(
        #[case] source: AccountNumber,
        #[case] destination: AccountNumber,
        #[case] amount: Decimal,
        #[case] expected: Result<(), LedgerError>,
    ) {
        let policy = TransferPolicy::default();
        assert_eq!(policy.validate(&ledger(), source, destination, amount), expected);
    }

    #[test]
    fn test_custom_minimum() {
        let policy = TransferPolicy::new(Decimal::ONE);
        assert!(policy
            .validate(&ledger(), 1002, 1003, Decimal::from(2))
            .is_ok());
    }
}
