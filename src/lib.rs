//! Payroll Insurance Enricher Library
//! # Overview
//!
//! This library enriches payroll deduction rows exported as CSV with
//! health-insurance attributes (carrier, coverage, level, plan). Each row's
//! bi-weekly employee amount is converted to a monthly figure and matched,
//! together with its deduction code, against an ordered rule table.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Rule, Record, OutputRecord, errors)
//! - [`core`] - Business logic components:
//!   - [`core::amount`] - Amount parsing, range matching, bi-weekly to monthly conversion
//!   - [`core::validator`] - Rule validation and lints
//!   - [`core::matcher`] - First-match rule lookup
//!   - [`core::transformer`] - Single row enrichment
//!   - [`core::batch_processor`] - Whole-batch validation and enrichment
//!   - [`core::rule_set`] - Editable rule table
//! - [`io`] - CSV reading and writing
//! - [`strategy`] - Sync and async reading strategies
//! - [`cli`], [`app`], [`telemetry`] - Binary plumbing
//!
//! # Matching
//!
//! - Rules are scanned in table order; the first rule with the same
//!   deduction code whose amount accepts the monthly figure wins
//! - Amounts are either exact (`"65"`) or inclusive ranges (`"65-65.5"`)
//! - Matching uses the monthly figure rounded to two decimals
//! - Unmatched rows keep their insurance columns as received

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod telemetry;
pub mod types;

pub use core::{find_rule, process_all, transform, validate_rule, BatchSummary, RuleSet};
pub use io::{read_payroll_csv, write_records_csv};
pub use types::{
    EnrichError, MonthlyAmount, OutputRecord, Record, Rule, RuleField, RuleFailure, RuleLint,
    RuleViolation,
};
