//! Asynchronous payroll reader with batch interface
//!
//! Reads payroll rows from any `futures::io::AsyncRead` using csv-async,
//! with the same settings as the synchronous reader.
//!
//! # Architecture
//!
//! ```text
//! AsyncRead → AsyncReader → batches of Records → InputTable
//!                  ↓
//!           csv_format module
//!           (record_from_fields, check_required_columns)
//! ```
//!
//! The enrichment engine only ever sees a complete [`InputTable`]; batches
//! are an I/O detail.

use crate::io::csv_format::{check_required_columns, record_from_fields, InputTable};
use crate::types::{EnrichError, Record};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous payroll reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    headers: Option<Vec<String>>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self {
            csv_reader,
            headers: None,
        }
    }

    /// Header row, read and checked on first use
    pub async fn headers(&mut self) -> Result<Vec<String>, EnrichError> {
        if let Some(headers) = &self.headers {
            return Ok(headers.clone());
        }

        let headers: Vec<String> = self
            .csv_reader
            .headers()
            .await?
            .iter()
            .map(str::to_string)
            .collect();
        check_required_columns(&headers)?;
        self.headers = Some(headers.clone());
        Ok(headers)
    }

    /// Read up to `batch_size` non-blank rows
    ///
    /// Returns an empty vector at end of input.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<Record>, EnrichError> {
        let headers = self.headers().await?;
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.records();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(raw)) => {
                    let record = record_from_fields(&headers, raw.iter());
                    if !record.is_blank() {
                        batch.push(record);
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }

        Ok(batch)
    }

    /// Read the whole input, batch by batch
    pub async fn read_table(&mut self, batch_size: usize) -> Result<InputTable, EnrichError> {
        let headers = self.headers().await?;
        let mut rows = Vec::new();

        loop {
            let batch = self.read_batch(batch_size.max(1)).await?;
            if batch.is_empty() {
                break;
            }
            rows.extend(batch);
        }

        Ok(InputTable { headers, rows })
    }
}
