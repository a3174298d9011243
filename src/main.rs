//! Payroll insurance enricher CLI
//!
//! Enriches payroll deduction rows exported as CSV with health-insurance
//! attributes looked up from a rule table.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payroll.csv > enriched.csv
//! cargo run -- --rules rules.csv --output enriched.csv payroll.csv
//! cargo run -- --strategy async --batch-size 500 payroll.csv > enriched.csv
//! cargo run -- --export-rules > rules.csv
//! cargo run -- --lint payroll.csv > enriched.csv
//! ```
//!
//! Logs are written to stderr; `RUST_LOG` overrides `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing file, invalid rules, unreadable CSV, etc.)

use payroll_insurance_enricher::{app, cli, telemetry};
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = telemetry::init(&args.log_level) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = app::run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
