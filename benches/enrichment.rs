//! Benchmark suite for the enrichment pipeline
//!
//! Compares the synchronous and asynchronous reading strategies and measures
//! the in-memory enrichment pass on its own, using the divan benchmarking
//! framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Payroll files are generated once per benchmark into a temporary file.
//! Rows cycle through the built-in deduction codes and a spread of amounts,
//! so a batch holds exact matches, range matches, unmatched rows and the odd
//! unparseable amount.

use payroll_insurance_enricher::cli::StrategyType;
use payroll_insurance_enricher::core::defaults::default_rules;
use payroll_insurance_enricher::core::process_all;
use payroll_insurance_enricher::io::read_payroll_csv;
use payroll_insurance_enricher::strategy::{create_strategy, BatchConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 100_000];

const ROWS: &[(&str, &str)] = &[
    ("2400", "60"),
    ("2400", "120"),
    ("2400", "200"),
    ("2400", "298"),
    ("2410", "10"),
    ("2410", "20"),
    ("2410", "30"),
    ("2420", "3"),
    ("2420", "6"),
    ("2420", "9"),
    ("2400", "150"),
    ("2410", "n/a"),
];

fn payroll_csv(rows: usize) -> String {
    let mut csv = String::from(
        "Employee,Deduction,Empe Amt/Pct,Hlth Ins Carrie,Hlth Ins Cvrage,Hlth Ins Level,Hlth Ins Plan\n",
    );
    for i in 0..rows {
        let (code, amount) = ROWS[i % ROWS.len()];
        csv.push_str(&format!("{},{},{},,,,\n", 1000 + i, code, amount));
    }
    csv
}

fn payroll_file(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(payroll_csv(rows).as_bytes())
        .expect("Failed to write payroll file");
    file.flush().expect("Failed to flush payroll file");
    file
}

/// Enrichment of rows already in memory
#[divan::bench(args = SIZES)]
fn process_all_in_memory(bencher: divan::Bencher, rows: usize) {
    let table = read_payroll_csv(payroll_csv(rows).as_bytes()).expect("Failed to read table");
    let rules = default_rules();

    bencher.bench(|| process_all(&table.rows, &rules).expect("Processing failed"));
}

/// Full pipeline with the synchronous reader
#[divan::bench(args = SIZES)]
fn sync_strategy(bencher: divan::Bencher, rows: usize) {
    let file = payroll_file(rows);
    let rules = default_rules();
    let strategy = create_strategy(StrategyType::Sync, None);

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(file.path(), &rules, &mut output)
            .expect("Processing failed");
        output
    });
}

/// Full pipeline with the async batch reader
#[divan::bench(args = SIZES)]
fn async_strategy(bencher: divan::Bencher, rows: usize) {
    let file = payroll_file(rows);
    let rules = default_rules();
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(file.path(), &rules, &mut output)
            .expect("Processing failed");
        output
    });
}
