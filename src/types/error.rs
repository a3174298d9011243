//! Error types for the enricher
//!
//! This module defines all error types that can occur while loading files,
//! validating the rule table and editing it.
//! Messages are written for the CLI, which prints them as-is.
//!
//! # Error Categories
//!
//! - **File Errors**: File not found, unreadable or malformed CSV, missing columns
//! - **Rule Errors**: Structurally invalid rules (batch-fatal)
//! - **Edit Errors**: Out-of-range rule indices, unknown rule fields
//!
//! Unparseable row amounts and unmatched rows are deliberately *not* errors;
//! they are carried on each [`OutputRecord`](super::OutputRecord).

use super::rule::RuleViolation;
use std::fmt;
use thiserror::Error;

/// Validation failures of a single rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleFailure {
    /// Zero-based position of the rule in the table
    pub index: usize,

    /// Every violation found, in validation order
    pub violations: Vec<RuleViolation>,
}

impl fmt::Display for RuleFailure {
    /// Renders with a 1-based rule number, e.g. `Rule 2: Carrier is required`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "Rule {}: {}", self.index + 1, messages.join(", "))
    }
}

fn join_failures(failures: &[RuleFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main error type for the enricher
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnrichError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Input header lacks a column the engine depends on
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// One or more rules are structurally invalid
    ///
    /// Fatal for the whole batch: no output rows are produced.
    #[error("Rule validation failed: {}", join_failures(.failures))]
    InvalidRules {
        /// Every offending rule with its violations
        failures: Vec<RuleFailure>,
    },

    /// Rule index does not exist in the table
    #[error("Rule index {index} is out of range for {len} rule(s)")]
    RuleIndexOutOfRange { index: usize, len: usize },

    /// Field name is not one of the editable rule fields
    #[error("Unknown rule field '{field}'")]
    UnknownRuleField { field: String },
}

// Conversion from io::Error to EnrichError
impl From<std::io::Error> for EnrichError {
    fn from(error: std::io::Error) -> Self {
        EnrichError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to EnrichError
impl From<csv::Error> for EnrichError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        EnrichError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from csv_async::Error to EnrichError
impl From<csv_async::Error> for EnrichError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        EnrichError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Constructors for the variants raised outside a `From` conversion

impl EnrichError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        EnrichError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(column: &str) -> Self {
        EnrichError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Create an InvalidRules error
    pub fn invalid_rules(failures: Vec<RuleFailure>) -> Self {
        EnrichError::InvalidRules { failures }
    }

    /// Create a RuleIndexOutOfRange error
    pub fn rule_index_out_of_range(index: usize, len: usize) -> Self {
        EnrichError::RuleIndexOutOfRange { index, len }
    }

    /// Create an UnknownRuleField error
    pub fn unknown_rule_field(field: &str) -> Self {
        EnrichError::UnknownRuleField {
            field: field.to_string(),
        }
    }

    /// 1-based numbers of every invalid rule, empty for other errors
    pub fn offending_rules(&self) -> Vec<usize> {
        match self {
            EnrichError::InvalidRules { failures } => {
                failures.iter().map(|f| f.index + 1).collect()
            }
            _ => Vec::new(),
        }
    }
}
