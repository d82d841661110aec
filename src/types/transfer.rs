//! Transfer-related types for the transfer ledger
//!
//! This module defines the records that flow through the ledger: queued
//! requests, completed transfers, and the per-call settlement report that
//! tells the caller which requests were applied and which were dropped.

use super::account::AccountNumber;
use super::error::LedgerError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format used when timestamps are written to or read from text
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A pending transfer waiting in its source account's queue
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    /// When the request was queued
    pub queued_at: DateTime<Utc>,

    /// Account that owns the queue and is debited
    pub source: AccountNumber,

    /// Account that is credited; only checked at settlement time
    pub destination: AccountNumber,

    /// Amount to move, always positive
    pub amount: Decimal,
}

/// A transfer that was applied during settlement
///
/// Appended to the source account's history and never modified afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedTransfer {
    /// The request as it was queued
    pub request: TransferRequest,

    /// When the request was applied
    pub executed_at: DateTime<Utc>,
}

/// A queued transfer that settlement dropped
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedTransfer {
    pub request: TransferRequest,
    pub reason: LedgerError,
}

/// Outcome of one `settle` call
///
/// `applied` and `rejected` are each in queue order. Together they account
/// for every request that was pending when settlement started.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettlementReport {
    /// The account whose queue was settled
    pub account: AccountNumber,

    /// Transfers that moved funds
    pub applied: Vec<CompletedTransfer>,

    /// Transfers that were dropped, with the reason
    pub rejected: Vec<RejectedTransfer>,
}

impl SettlementReport {
    pub fn new(account: AccountNumber) -> Self {
        SettlementReport {
            account,
            ..Default::default()
        }
    }

    /// True when the queue was already empty
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.rejected.is_empty()
    }

    /// Sum of all applied amounts
    pub fn applied_total(&self) -> Decimal {
        self.applied
            .iter()
            .map(|completed| completed.request.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(amount: i64) -> TransferRequest {
        TransferRequest {
            queued_at: Utc.with_ymd_and_hms(2024, 8, 17, 14, 0, 0).unwrap(),
            source: 1001,
            destination: 1002,
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = SettlementReport::new(1001);
        assert_eq!(report.account, 1001);
        assert!(report.is_empty());
        assert_eq!(report.applied_total(), Decimal::ZERO);
    }

    #[test]
    fn test_applied_total_ignores_rejected() {
        let executed_at = Utc.with_ymd_and_hms(2024, 8, 17, 16, 0, 0).unwrap();
        let mut report = SettlementReport::new(1001);
        report.applied.push(CompletedTransfer {
            request: request(300),
            executed_at,
        });
        report.applied.push(CompletedTransfer {
            request: request(200),
            executed_at,
        });
        report.rejected.push(RejectedTransfer {
            request: request(9000),
            reason: LedgerError::insufficient_funds(1001, Decimal::ZERO, Decimal::from(9000)),
        });

        assert!(!report.is_empty());
        assert_eq!(report.applied_total(), Decimal::from(500));
    }
}
