use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Enrich payroll deduction rows with health-insurance attributes
#[derive(Parser, Debug)]
#[command(name = "payroll-insurance-enricher")]
#[command(
    about = "Enrich payroll deduction rows with health-insurance attributes",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV file path containing payroll deduction rows
    #[arg(
        value_name = "INPUT",
        required_unless_present = "export_rules",
        help = "Path to the payroll CSV file"
    )]
    pub input_file: Option<PathBuf>,

    /// Rule table CSV; the built-in table is used when omitted
    #[arg(
        long = "rules",
        value_name = "FILE",
        help = "Rule table CSV (deduction,empAmount,carrier,coverage,level,plan)"
    )]
    pub rules_file: Option<PathBuf>,

    /// Destination for the enriched CSV; stdout when omitted
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Reading strategy to use for the payroll file
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Reading strategy: 'sync' for synchronous or 'async' for tokio-based reading"
    )]
    pub strategy: StrategyType,

    /// Number of rows read per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Write the active rule table as CSV instead of processing a payroll file
    #[arg(long = "export-rules", conflicts_with = "input_file")]
    pub export_rules: bool,

    /// Warn about rules that can never match
    #[arg(long = "lint")]
    pub lint: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

/// Available reading strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}
