//! Transfer ledger CLI
//!
//! Applies a command file to an in-memory ledger and writes a report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > accounts.csv
//! cargo run -- --accounts bank.csv commands.csv
//! cargo run -- --min-amount 10 --format text commands.csv
//! cargo run -- --report history commands.csv > history.csv
//! RUST_LOG=info cargo run -- commands.csv
//! ```
//!
//! Without `--accounts`, the built-in demo registry (accounts 1001, 1002 and
//! 1003) is used.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed registry, output failure, etc.)

use std::process;
use transfer_ledger::cli;
use transfer_ledger::core::{demo_accounts, Ledger};
use transfer_ledger::driver::CommandProcessor;
use transfer_ledger::io::read_accounts;
use transfer_ledger::logging;
use transfer_ledger::LedgerError;

fn run(args: &cli::CliArgs) -> Result<(), LedgerError> {
    let accounts = match &args.accounts_file {
        Some(path) => read_accounts(path)?,
        None => demo_accounts(),
    };
    let mut ledger = Ledger::new(accounts)?;

    let processor = CommandProcessor::new(args.to_policy(), args.report, args.format);
    let mut output = std::io::stdout();
    processor.run(&mut ledger, &args.input_file, &mut output)?;
    Ok(())
}

fn main() {
    let args = cli::parse_args();
    logging::init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
