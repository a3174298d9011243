//! Synchronous processing strategy
//!
//! Reads the payroll file with [`SyncReader`] on the calling thread.

use crate::io::csv_format::InputTable;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::EnrichError;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use payroll_insurance_enricher::core::defaults::default_rules;
/// use payroll_insurance_enricher::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy
///     .process(Path::new("payroll.csv"), &default_rules(), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn read_input(&self, input_path: &Path) -> Result<InputTable, EnrichError> {
        SyncReader::new(input_path)?.read_table()
    }
}
