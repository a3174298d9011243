//! Built-in rule table
//!
//! Amounts are monthly figures. Deduction `2400` is medical, `2410` dental
//! and `2420` vision.
//!
//! Some medical ranges are entered with their bounds inverted (for example
//! `645.67-645.5`). They are kept as shipped; range bounds are never
//! reordered, so these rows never match and show up as lints.

use crate::types::Rule;

/// `(deduction, empAmount, carrier, coverage, level, plan)`
const DEFAULT_RULES: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("2400", "130", "Aetna", "Employee Only", "1", "PPO"),
    ("2400", "260", "Aetna", "Employee + Spouse", "1", "PPO"),
    ("2400", "400-450", "Kaiser Permanente", "Employee + Children", "1", "HMO"),
    ("2400", "440-500", "Cigna", "Employee + Children", "2", "EPO"),
    ("2400", "645.67-645.5", "Aetna", "Family", "1", "PPO"),
    ("2400", "866.67-866.5", "Kaiser Permanente", "Family", "2", "HMO"),
    ("2410", "21.67", "Delta Dental", "Employee Only", "1", ""),
    ("2410", "43.33", "Delta Dental", "Employee + Spouse", "1", ""),
    ("2410", "65-65.5", "Delta Dental", "Family", "1", ""),
    ("2420", "6.5", "VSP", "Employee Only", "1", ""),
    ("2420", "13", "VSP", "Employee + Spouse", "1", ""),
    ("2420", "19.5-19.6", "VSP", "Family", "1", ""),
];

/// The rule table used when no rule file is supplied
pub fn default_rules() -> Vec<Rule> {
    DEFAULT_RULES
        .iter()
        .map(|&(deduction, amount, carrier, coverage, level, plan)| {
            Rule::new(deduction, amount, carrier, coverage, level, plan)
        })
        .collect()
}
