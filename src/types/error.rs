//! Error types for the transfer ledger
//!
//! This module defines all error types that can occur while building a
//! ledger, queuing and settling transfers, and driving the ledger from
//! command files.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Unknown or duplicated account numbers
//! - **Transfer Errors**: Insufficient funds, invalid or too small amounts
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **File I/O Errors**: File not found, permission denied, malformed CSV

use rust_decimal::Decimal;
use thiserror::Error;

use super::account::AccountNumber;

/// Main error type for the ledger
///
/// Settlement-time failures (insufficient funds, unknown destination,
/// overflow) are not fatal: they are attached to the dropped request in the
/// settlement report and the rest of the batch proceeds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Account number is not in the registry
    #[error("Account {account} does not exist")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// Registry was built with the same account number twice
    #[error("Duplicate account number {account}")]
    DuplicateAccount {
        /// The repeated account number
        account: AccountNumber,
    },

    /// Source balance is below the transfer amount at settlement time
    ///
    /// The transfer is dropped and not retried.
    #[error("Insufficient balance in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Source account
        account: AccountNumber,
        /// Balance when the transfer was attempted
        balance: Decimal,
        /// Transfer amount
        requested: Decimal,
    },

    /// Amount is zero or negative
    #[error("Invalid amount {amount}: transfers must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Amount is below the caller's minimum transfer policy
    #[error("Amount {amount} is below the minimum transfer amount {minimum}")]
    BelowMinimumAmount {
        /// The rejected amount
        amount: Decimal,
        /// Configured minimum
        minimum: Decimal,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance would overflow
        account: AccountNumber,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV row could not be parsed
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountNumber) -> Self {
        LedgerError::DuplicateAccount { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create a BelowMinimumAmount error
    pub fn below_minimum(amount: Decimal, minimum: Decimal) -> Self {
        LedgerError::BelowMinimumAmount { amount, minimum }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a ParseError error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 1004 },
        "Account 1004 does not exist"
    )]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { account: 1001 },
        "Duplicate account number 1001"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 1001, balance: Decimal::new(10050, 2), requested: Decimal::from(300) },
        "Insufficient balance in account 1001: balance 100.50, requested 300"
    )]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: Decimal::from(-5) },
        "Invalid amount -5: transfers must be positive"
    )]
    #[case::below_minimum(
        LedgerError::BelowMinimumAmount { amount: Decimal::from(20), minimum: Decimal::from(50) },
        "Amount 20 is below the minimum transfer amount 50"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "credit".to_string(), account: 1002 },
        "Arithmetic overflow in credit for account 1002"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(3), message: "Unknown command 'pay'".to_string() },
        "CSV parse error at line 3: Unknown command 'pay'"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "bad row".to_string() },
        "CSV parse error: bad row"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found(7),
        LedgerError::AccountNotFound { account: 7 }
    )]
    #[case::below_minimum(
        LedgerError::below_minimum(Decimal::ONE, Decimal::TEN),
        LedgerError::BelowMinimumAmount { amount: Decimal::ONE, minimum: Decimal::TEN }
    )]
    #[case::arithmetic_overflow(
        LedgerError::arithmetic_overflow("debit", 3),
        LedgerError::ArithmeticOverflow { operation: "debit".to_string(), account: 3 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
