//! Streaming reader over a command file
//!
//! Provides an iterator over ledger commands from a CSV file. Delegates CSV
//! format concerns to the csv_format module.
//!
//! ```no_run
//! use transfer_ledger::io::CommandReader;
//! use std::path::Path;
//!
//! let reader = CommandReader::new(Path::new("commands.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `Err` items, with the line number
//!   of the offending row, and iteration continues

use crate::io::csv_format::{convert_command_record, CommandRecord, LedgerCommand};
use crate::types::LedgerError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open a file, mapping a missing file to `FileNotFound`
pub(crate) fn open(path: &Path) -> Result<File, LedgerError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LedgerError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

/// CSV reader configured the same way for every input file
///
/// - Trim whitespace from all fields
/// - Allow rows shorter than the header (optional trailing columns)
pub(crate) fn csv_reader(file: File) -> csv::Reader<File> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file)
}

/// Physical line on which a record starts, counting from 1
///
/// The csv reader skips blank lines and lets quoted fields span lines, so
/// this is taken from the reader rather than counted per row.
pub(crate) fn record_line(record: &StringRecord) -> Option<u64> {
    record.position().map(|position| position.line())
}

/// Map a csv read error to a `ParseError` on the line it occurred
pub(crate) fn read_error(e: csv::Error) -> LedgerError {
    let line = e.position().map(|position| position.line());
    LedgerError::parse(line, e.to_string())
}

/// Iterator over the commands in a command file
///
/// Reads one row at a time; the file is never loaded whole.
#[derive(Debug)]
pub struct CommandReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
    done: bool,
}

impl CommandReader {
    /// Open a command file for streaming iteration
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let mut reader = csv_reader(open(path)?);
        let headers = reader.headers().map_err(read_error)?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            done: false,
        })
    }
}

impl Iterator for CommandReader {
    type Item = Result<LedgerCommand, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                let line = record_line(&self.record);
                Some(
                    self.record
                        .deserialize::<CommandRecord>(Some(&self.headers))
                        .map_err(|e| LedgerError::parse(line, e.to_string()))
                        .and_then(|record| {
                            convert_command_record(record)
                                .map_err(|message| LedgerError::parse(line, message))
                        }),
                )
            }
            Err(e) => {
                // An I/O failure leaves the reader unusable; a bad row does not
                if e.is_io_error() {
                    self.done = true;
                }
                Some(Err(read_error(e)))
            }
        }
    }
}
