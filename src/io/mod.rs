//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output and rule file serialization)
//! - `sync_reader` - Synchronous payroll reader with iterator interface
//! - `async_reader` - Asynchronous payroll reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    output_headers, read_payroll_csv, read_rules_csv, write_records_csv, write_rules_csv,
    InputTable,
};
pub use sync_reader::SyncReader;
