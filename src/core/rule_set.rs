//! Ordered rule table with per-rule validation state
//!
//! `RuleSet` is a value object: every edit returns a new set and leaves the
//! original untouched, so a batch run can hold a stable snapshot while the
//! table is being edited elsewhere. Each edit revalidates only the rule it
//! touched.

use crate::core::defaults::default_rules;
use crate::core::validator::{lint_rule, validate_rule};
use crate::types::{EnrichError, Rule, RuleField, RuleFailure, RuleLint, RuleViolation};

/// Ordered rules plus the validation result of each one
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    /// Parallel to `rules`
    errors: Vec<Vec<RuleViolation>>,
}

impl Default for RuleSet {
    /// The built-in rule table
    fn default() -> Self {
        RuleSet::new(default_rules())
    }
}

impl RuleSet {
    /// Create a rule set, validating every rule
    pub fn new(rules: Vec<Rule>) -> Self {
        let errors = rules.iter().map(validate_rule).collect();
        RuleSet { rules, errors }
    }

    /// Rules in table order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Violations recorded for the rule at `index`
    pub fn errors_for(&self, index: usize) -> Option<&[RuleViolation]> {
        self.errors.get(index).map(Vec::as_slice)
    }

    /// True when no rule has violations
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Vec::is_empty)
    }

    /// Every invalid rule with its violations
    pub fn failures(&self) -> Vec<RuleFailure> {
        self.errors
            .iter()
            .enumerate()
            .filter(|(_, violations)| !violations.is_empty())
            .map(|(index, violations)| RuleFailure {
                index,
                violations: violations.clone(),
            })
            .collect()
    }

    /// Lints for every rule that has any, keyed by zero-based index
    pub fn lints(&self) -> Vec<(usize, Vec<RuleLint>)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (index, lint_rule(rule)))
            .filter(|(_, lints)| !lints.is_empty())
            .collect()
    }

    /// Append a rule, returning the new set and the rule's violations
    pub fn add_rule(&self, rule: Rule) -> (RuleSet, Vec<RuleViolation>) {
        let violations = validate_rule(&rule);
        let mut next = self.clone();
        next.rules.push(rule);
        next.errors.push(violations.clone());
        (next, violations)
    }

    /// Append a blank rule (level `"1"`, everything else empty)
    pub fn add_blank_rule(&self) -> (RuleSet, Vec<RuleViolation>) {
        self.add_rule(Rule::default())
    }

    /// Remove the rule at `index` together with its validation entry
    pub fn remove_rule(&self, index: usize) -> Result<RuleSet, EnrichError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.rules.remove(index);
        next.errors.remove(index);
        Ok(next)
    }

    /// Replace one field of the rule at `index` and revalidate that rule only
    pub fn edit_rule(
        &self,
        index: usize,
        field: RuleField,
        value: &str,
    ) -> Result<(RuleSet, Vec<RuleViolation>), EnrichError> {
        self.check_index(index)?;
        let edited = self.rules[index].with_field(field, value);
        let violations = validate_rule(&edited);

        let mut next = self.clone();
        next.rules[index] = edited;
        next.errors[index] = violations.clone();
        Ok((next, violations))
    }

    fn check_index(&self, index: usize) -> Result<(), EnrichError> {
        if index < self.rules.len() {
            Ok(())
        } else {
            Err(EnrichError::rule_index_out_of_range(index, self.rules.len()))
        }
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        RuleSet::new(rules)
    }
}
