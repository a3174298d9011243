//! Rule validation
//!
//! Validation is structural only: required fields are present and the amount
//! has a parseable shape. Overlaps between rules are allowed and resolved by
//! table order in the matcher.

use crate::core::amount::{is_valid_amount, AmountSpec};
use crate::types::{Rule, RuleFailure, RuleLint, RuleViolation};

/// Validate a single rule
///
/// Returns every violation found, in a fixed order: deduction, amount,
/// carrier, coverage. An empty vector means the rule is usable.
pub fn validate_rule(rule: &Rule) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if rule.deduction.trim().is_empty() {
        violations.push(RuleViolation::MissingDeduction);
    }
    if !is_valid_amount(&rule.emp_amount) {
        violations.push(RuleViolation::InvalidAmount);
    }
    if rule.carrier.trim().is_empty() {
        violations.push(RuleViolation::MissingCarrier);
    }
    if rule.coverage.trim().is_empty() {
        violations.push(RuleViolation::MissingCoverage);
    }

    violations
}

/// Validate every rule, keeping only the ones that fail
pub fn validate_rules(rules: &[Rule]) -> Vec<RuleFailure> {
    rules
        .iter()
        .enumerate()
        .filter_map(|(index, rule)| {
            let violations = validate_rule(rule);
            (!violations.is_empty()).then_some(RuleFailure { index, violations })
        })
        .collect()
}

/// Report rules that validate but can never match
pub fn lint_rule(rule: &Rule) -> Vec<RuleLint> {
    match AmountSpec::parse(&rule.emp_amount) {
        Some(AmountSpec::Any) => vec![RuleLint::EmptyAmount],
        Some(AmountSpec::Exact(_)) if rule.emp_amount.contains('-') => {
            vec![RuleLint::HyphenatedExact {
                amount: rule.emp_amount.trim().to_string(),
            }]
        }
        Some(AmountSpec::Range { min, max }) if min > max => {
            vec![RuleLint::InvertedRange { min, max }]
        }
        _ => Vec::new(),
    }
}
