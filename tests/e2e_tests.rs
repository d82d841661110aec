//! End-to-end integration tests
//!
//! These tests validate the complete command processing pipeline using
//! predefined CSV fixtures. Each test:
//! 1. Builds a ledger from accounts.csv, or from the demo registry when the
//!    fixture has no accounts.csv
//! 2. Applies commands.csv through the command processor
//! 3. Compares the accounts report with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The worked example (seeded queue of account 1001)
//! - Insufficient funds and the no-retry policy
//! - Caller-side minimum amount and unknown account checks
//! - Malformed command rows
//! - Settlement order dependencies between accounts

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use transfer_ledger::core::demo_accounts;
    use transfer_ledger::io::read_accounts;
    use transfer_ledger::{CommandProcessor, Ledger};

    /// Run a fixture by applying commands.csv and comparing with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or the output doesn't match.
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let accounts_path = format!("{}/accounts.csv", fixture_dir);
        let commands_path = format!("{}/commands.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&commands_path).exists(),
            "Commands file not found: {}",
            commands_path
        );

        let accounts = if Path::new(&accounts_path).exists() {
            read_accounts(Path::new(&accounts_path))
                .unwrap_or_else(|e| panic!("Failed to read registry: {}", e))
        } else {
            demo_accounts()
        };
        let mut ledger = Ledger::new(accounts).expect("Registry must be valid");
        let total_before = ledger.total_balance();

        let processor = CommandProcessor::default();
        let mut output = Vec::new();
        processor
            .run(&mut ledger, Path::new(&commands_path), &mut output)
            .unwrap_or_else(|e| panic!("Failed to process commands: {}", e));

        let actual_output = String::from_utf8(output).expect("Report must be UTF-8");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
        assert_eq!(
            ledger.total_balance(),
            total_before,
            "Total balance changed in fixture {}",
            fixture_name
        );
    }

    #[rstest]
    #[case("worked_example")]
    #[case("insufficient_funds")]
    #[case("minimum_amount")]
    #[case("unknown_accounts")]
    #[case("unsettled_queue")]
    #[case("malformed_rows")]
    #[case("settlement_order")]
    #[case("drain_and_refill")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }
}
