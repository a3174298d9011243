//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `rule`: Enrichment rules and their validation outcomes
//! - `record`: Ordered CSV records and enriched output records
//! - `error`: Error types for the enricher

pub mod error;
pub mod record;
pub mod rule;

pub use error::{EnrichError, RuleFailure};
pub use record::{MonthlyAmount, OutputRecord, Record};
pub use rule::{Rule, RuleField, RuleLint, RuleViolation};
