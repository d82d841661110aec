//! Built-in demo registry
//!
//! Three accounts used when no registry file is supplied. Alice's account
//! starts with two queued transfers and one executed transfer on record.

use crate::types::Account;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// A fixed August 2024 instant, checked at compile time
const fn august_2024(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    match (
        NaiveDate::from_ymd_opt(2024, 8, day),
        NaiveTime::from_hms_opt(hour, minute, 0),
    ) {
        (Some(date), Some(time)) => NaiveDateTime::new(date, time),
        _ => panic!("invalid demo timestamp"),
    }
}

const FIRST_QUEUED: NaiveDateTime = august_2024(17, 14, 0);
const SECOND_QUEUED: NaiveDateTime = august_2024(17, 15, 0);
const PAST_QUEUED: NaiveDateTime = august_2024(15, 9, 0);
const PAST_EXECUTED: NaiveDateTime = august_2024(15, 9, 30);

/// Accounts 1001, 1002 and 1003
pub fn demo_accounts() -> Vec<Account> {
    let alice = Account::new(1001, "Alice", "Smith", "123456789", Decimal::new(250050, 2))
        .with_pending_transfer(FIRST_QUEUED.and_utc(), 1002, Decimal::from(300))
        .with_pending_transfer(SECOND_QUEUED.and_utc(), 1003, Decimal::from(200))
        .with_completed_transfer(
            PAST_QUEUED.and_utc(),
            1002,
            Decimal::from(500),
            PAST_EXECUTED.and_utc(),
        );

    vec![
        alice,
        Account::new(1002, "Bob", "Johnson", "987654321", Decimal::new(390075, 2)),
        Account::new(1003, "Bob2", "Johnson2", "987654320", Decimal::new(310075, 2)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ledger;
    use crate::types::TIMESTAMP_FORMAT;

    #[test]
    fn test_demo_registry_builds_a_ledger() {
        let ledger = Ledger::new(demo_accounts()).unwrap();

        assert_eq!(ledger.len(), 3);
        let alice = ledger.account(1001).unwrap();
        assert_eq!(alice.pending().len(), 2);
        assert_eq!(alice.history().len(), 1);
        assert_eq!(ledger.total_balance(), Decimal::new(950200, 2));
    }

    #[test]
    fn test_demo_settlement_matches_worked_example() {
        let mut ledger = Ledger::new(demo_accounts()).unwrap();

        ledger.settle(1001).unwrap();

        assert_eq!(ledger.account(1001).unwrap().balance(), Decimal::new(200050, 2));
        assert_eq!(ledger.account(1001).unwrap().history().len(), 3);
    }

    #[test]
    fn test_demo_timestamps() {
        let accounts = demo_accounts();
        let alice = &accounts[0];

        let queued: Vec<String> = alice
            .pending()
            .iter()
            .map(|request| request.queued_at.format(TIMESTAMP_FORMAT).to_string())
            .collect();
        assert_eq!(queued, ["2024-08-17 14:00:00", "2024-08-17 15:00:00"]);
        assert_eq!(
            alice.history()[0].executed_at.format(TIMESTAMP_FORMAT).to_string(),
            "2024-08-15 09:30:00"
        );
    }
}
