//! Asynchronous reading strategy
//!
//! Reads the payroll file through tokio and csv-async in batches. The whole
//! file is awaited before enrichment starts, so the engine never sees a
//! partially read file.
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── AsyncReader (batch CSV reading)
//!     └── enrich_table (synchronous enrichment of the complete table)
//! ```

use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::InputTable;
use crate::strategy::ProcessingStrategy;
use crate::types::EnrichError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Configuration for batched reading
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of rows read per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, falling back to the default for zero
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "Invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous reading strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    async fn read_table(&self, input_path: &Path) -> Result<InputTable, EnrichError> {
        let file = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    EnrichError::file_not_found(&input_path.display().to_string())
                }
                _ => EnrichError::IoError {
                    message: format!("Failed to open file '{}': {}", input_path.display(), e),
                },
            })?;

        // Wrap tokio file in a compatibility layer for csv-async
        let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
        let mut reader = AsyncReader::new(compat_file);

        reader.read_table(self.config.batch_size).await
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn read_input(&self, input_path: &Path) -> Result<InputTable, EnrichError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| EnrichError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(self.read_table(input_path))
    }
}
