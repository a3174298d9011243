//! Rule-related types for the enricher
//!
//! A rule maps a (deduction code, monthly amount) pair onto the four
//! health-insurance attributes written into matching rows.

use super::error::EnrichError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Level assigned to newly created rules
pub const DEFAULT_LEVEL: &str = "1";

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

/// Enrichment rule
///
/// `emp_amount` is kept as written: either empty, a single number (`"65"`)
/// or an inclusive range (`"65-65.5"`). Bounds are never reordered, so a
/// range written with `min > max` matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Payroll deduction code this rule applies to
    pub deduction: String,

    /// Exact monthly amount or inclusive `min-max` range
    #[serde(default)]
    pub emp_amount: String,

    /// Insurance carrier written to `Hlth Ins Carrie`
    #[serde(default)]
    pub carrier: String,

    /// Coverage tier written to `Hlth Ins Cvrage`
    #[serde(default)]
    pub coverage: String,

    /// Free-form level written to `Hlth Ins Level`
    #[serde(default = "default_level")]
    pub level: String,

    /// Free-form plan written to `Hlth Ins Plan`
    #[serde(default)]
    pub plan: String,
}

impl Default for Rule {
    /// A blank rule, as created by "add rule": level `"1"`, everything else empty
    fn default() -> Self {
        Rule {
            deduction: String::new(),
            emp_amount: String::new(),
            carrier: String::new(),
            coverage: String::new(),
            level: default_level(),
            plan: String::new(),
        }
    }
}

impl Rule {
    /// Create a rule from its six fields
    pub fn new(
        deduction: &str,
        emp_amount: &str,
        carrier: &str,
        coverage: &str,
        level: &str,
        plan: &str,
    ) -> Self {
        Rule {
            deduction: deduction.to_string(),
            emp_amount: emp_amount.to_string(),
            carrier: carrier.to_string(),
            coverage: coverage.to_string(),
            level: level.to_string(),
            plan: plan.to_string(),
        }
    }

    /// Return a copy of this rule with one field replaced
    pub fn with_field(&self, field: RuleField, value: &str) -> Self {
        let mut rule = self.clone();
        let slot = match field {
            RuleField::Deduction => &mut rule.deduction,
            RuleField::EmpAmount => &mut rule.emp_amount,
            RuleField::Carrier => &mut rule.carrier,
            RuleField::Coverage => &mut rule.coverage,
            RuleField::Level => &mut rule.level,
            RuleField::Plan => &mut rule.plan,
        };
        *slot = value.to_string();
        rule
    }
}

/// Editable rule fields
///
/// Parses from the same names used as rule-file column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    Deduction,
    EmpAmount,
    Carrier,
    Coverage,
    Level,
    Plan,
}

impl RuleField {
    /// Column name used in rule files
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleField::Deduction => "deduction",
            RuleField::EmpAmount => "empAmount",
            RuleField::Carrier => "carrier",
            RuleField::Coverage => "coverage",
            RuleField::Level => "level",
            RuleField::Plan => "plan",
        }
    }
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleField {
    type Err = EnrichError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "deduction" => Ok(RuleField::Deduction),
            "empAmount" => Ok(RuleField::EmpAmount),
            "carrier" => Ok(RuleField::Carrier),
            "coverage" => Ok(RuleField::Coverage),
            "level" => Ok(RuleField::Level),
            "plan" => Ok(RuleField::Plan),
            other => Err(EnrichError::unknown_rule_field(other)),
        }
    }
}

/// Structural problem that makes a rule unusable
///
/// The display strings are the user-facing validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Deduction code is required")]
    MissingDeduction,

    #[error("Amount must be a number or range")]
    InvalidAmount,

    #[error("Carrier is required")]
    MissingCarrier,

    #[error("Coverage is required")]
    MissingCoverage,
}

/// Non-fatal observation about a rule that can never match
#[derive(Debug, Clone, PartialEq)]
pub enum RuleLint {
    /// Range written with its bounds inverted
    InvertedRange { min: f64, max: f64 },

    /// Single amount containing `-` (`"-5"`, `"1e-5"`), which matching
    /// splits as a range
    HyphenatedExact { amount: String },

    /// No amount given, so the rule never matches
    EmptyAmount,
}

impl fmt::Display for RuleLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleLint::InvertedRange { min, max } => write!(
                f,
                "Range {}-{} has min greater than max and never matches",
                min, max
            ),
            RuleLint::HyphenatedExact { amount } => write!(
                f,
                "Amount {} contains '-' and is compared as a range, so it never matches",
                amount
            ),
            RuleLint::EmptyAmount => write!(f, "Amount is empty and never matches"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_rule_has_level_one_and_empty_plan() {
        let rule = Rule::default();
        assert_eq!(rule.level, "1");
        assert_eq!(rule.plan, "");
        assert!(rule.deduction.is_empty());
        assert!(rule.emp_amount.is_empty());
    }

    #[rstest]
    #[case::deduction(RuleField::Deduction, "2400")]
    #[case::emp_amount(RuleField::EmpAmount, "60-70")]
    #[case::carrier(RuleField::Carrier, "Aetna")]
    #[case::coverage(RuleField::Coverage, "Family")]
    #[case::level(RuleField::Level, "2")]
    #[case::plan(RuleField::Plan, "HMO")]
    fn test_with_field_replaces_only_that_field(#[case] field: RuleField, #[case] value: &str) {
        let original = Rule::new("2410", "21.67", "Delta Dental", "Employee Only", "1", "PPO");
        let edited = original.with_field(field, value);

        let fields = |r: &Rule| {
            vec![
                r.deduction.clone(),
                r.emp_amount.clone(),
                r.carrier.clone(),
                r.coverage.clone(),
                r.level.clone(),
                r.plan.clone(),
            ]
        };
        let changed: Vec<_> = fields(&original)
            .into_iter()
            .zip(fields(&edited))
            .filter(|(a, b)| a != b)
            .collect();

        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].1, value);
    }

    #[rstest]
    #[case("deduction", RuleField::Deduction)]
    #[case("empAmount", RuleField::EmpAmount)]
    #[case(" plan ", RuleField::Plan)]
    fn test_rule_field_parsing(#[case] input: &str, #[case] expected: RuleField) {
        assert_eq!(input.parse::<RuleField>().unwrap(), expected);
    }

    #[test]
    fn test_rule_field_parsing_rejects_unknown() {
        let err = "premium".parse::<RuleField>().unwrap_err();
        assert_eq!(err, EnrichError::unknown_rule_field("premium"));
    }

    #[rstest]
    #[case(RuleViolation::MissingDeduction, "Deduction code is required")]
    #[case(RuleViolation::InvalidAmount, "Amount must be a number or range")]
    #[case(RuleViolation::MissingCarrier, "Carrier is required")]
    #[case(RuleViolation::MissingCoverage, "Coverage is required")]
    fn test_violation_messages(#[case] violation: RuleViolation, #[case] expected: &str) {
        assert_eq!(violation.to_string(), expected);
    }

    #[rstest]
    #[case(
        RuleLint::InvertedRange { min: 645.67, max: 645.5 },
        "Range 645.67-645.5 has min greater than max and never matches"
    )]
    #[case(
        RuleLint::HyphenatedExact { amount: "-5".to_string() },
        "Amount -5 contains '-' and is compared as a range, so it never matches"
    )]
    #[case(RuleLint::EmptyAmount, "Amount is empty and never matches")]
    fn test_lint_messages(#[case] lint: RuleLint, #[case] expected: &str) {
        assert_eq!(lint.to_string(), expected);
    }
}
