// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, ReportFormat, ReportKind};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing input file, conflicting
/// report options, or --help), clap prints an error message or help text and
/// exits the process.
pub fn parse_args() -> CliArgs {
    let args = CliArgs::parse();
    if let Err(e) = args.validate() {
        e.exit();
    }
    args
}
