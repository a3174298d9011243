//! Synchronous payroll reader with iterator interface
//!
//! Opens a payroll CSV, checks its header, and yields one [`Record`] per
//! non-blank row. Format concerns (naive comma splitting, padding, required
//! columns) are delegated to the `csv_format` module.
//!
//! ```no_run
//! use payroll_insurance_enricher::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("payroll.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Row: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{
    check_required_columns, payroll_reader_builder, record_from_fields, InputTable,
};
use crate::types::{EnrichError, Record};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open a file, mapping a missing file to [`EnrichError::FileNotFound`]
pub(crate) fn open_file(path: &Path) -> Result<File, EnrichError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EnrichError::file_not_found(&path.display().to_string()),
        _ => EnrichError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

/// Synchronous payroll reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: Vec<String>,
}

impl SyncReader {
    /// Open a payroll CSV and read its header
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened, the header cannot be parsed,
    /// or a required column is missing.
    pub fn new(path: &Path) -> Result<Self, EnrichError> {
        let file = open_file(path)?;
        let mut reader = payroll_reader_builder()
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        check_required_columns(&headers)?;

        Ok(Self { reader, headers })
    }

    /// Header row, trimmed
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Read every remaining row into a table
    ///
    /// Stops at the first row that cannot be read; no partial table is
    /// returned.
    pub fn read_table(self) -> Result<InputTable, EnrichError> {
        let headers = self.headers.clone();
        let rows = self.collect::<Result<Vec<_>, _>>()?;
        Ok(InputTable { headers, rows })
    }
}

impl Iterator for SyncReader {
    type Item = Result<Record, EnrichError>;

    /// Next non-blank row, or `None` at end of file
    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = csv::StringRecord::new();
        loop {
            match self.reader.read_record(&mut raw) {
                Ok(true) => {
                    let record = record_from_fields(&self.headers, raw.iter());
                    if !record.is_blank() {
                        return Some(Ok(record));
                    }
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
