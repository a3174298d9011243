//! Processing strategy module
//!
//! A strategy decides how the payroll file is read. Whatever the strategy,
//! the file is read completely before enrichment starts, and enrichment
//! itself is the same synchronous pass over the whole table.

use crate::cli::StrategyType;
use crate::core::{process_all, BatchSummary};
use crate::io::csv_format::{output_headers, write_records_csv, InputTable};
use crate::types::{EnrichError, Rule};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete enrichment pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Read the whole payroll file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed, or lacks a
    /// required column.
    fn read_input(&self, input_path: &Path) -> Result<InputTable, EnrichError>;

    /// Read the payroll file, enrich it against `rules`, and write the CSV
    ///
    /// Nothing is written when the file cannot be read or any rule is
    /// invalid.
    fn process(
        &self,
        input_path: &Path,
        rules: &[Rule],
        output: &mut dyn Write,
    ) -> Result<BatchSummary, EnrichError> {
        let table = self.read_input(input_path)?;
        enrich_table(&table, rules, output)
    }
}

/// Enrich an already loaded table and write the result
pub fn enrich_table(
    table: &InputTable,
    rules: &[Rule],
    output: &mut dyn Write,
) -> Result<BatchSummary, EnrichError> {
    let outputs = process_all(&table.rows, rules)?;
    write_records_csv(&output_headers(&table.headers), &outputs, output)?;

    let summary = BatchSummary::from_outputs(&outputs);
    info!(
        rows = summary.rows,
        matched = summary.matched,
        unmatched = summary.unmatched,
        unparseable = summary.unparseable,
        "Enrichment complete"
    );
    Ok(summary)
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` only applies to the async strategy.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
