//! Core enrichment logic
//!
//! This module contains the rule-matching and row-transformation engine:
//! - `amount` - Amount parsing, range matching and bi-weekly to monthly conversion
//! - `validator` - Structural rule validation and lints
//! - `matcher` - First-match rule lookup
//! - `transformer` - Single row enrichment
//! - `batch_processor` - Whole-batch validation and transformation
//! - `rule_set` - Editable rule table value object
//! - `defaults` - Built-in rule table

pub mod amount;
pub mod batch_processor;
pub mod defaults;
pub mod matcher;
pub mod rule_set;
pub mod transformer;
pub mod validator;

pub use batch_processor::{process_all, BatchSummary};
pub use matcher::find_rule;
pub use rule_set::RuleSet;
pub use transformer::transform;
pub use validator::{lint_rule, validate_rule};
