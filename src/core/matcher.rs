//! First-match rule lookup
//!
//! Rules are scanned in table order and the first rule whose deduction code
//! equals the row's code and whose amount accepts the monthly amount wins.
//! Table order is therefore the tie-break for overlapping ranges, and the
//! scan must stay linear.

use crate::core::amount::is_within_range;
use crate::types::Rule;

/// Find the first rule that applies to a deduction code and monthly amount
///
/// # Returns
///
/// The index and rule of the first match, or `None` when no rule applies.
/// An unmatched row is not an error.
pub fn find_rule<'a>(
    rules: &'a [Rule],
    deduction_code: &str,
    monthly_amount: f64,
) -> Option<(usize, &'a Rule)> {
    rules.iter().enumerate().find(|(_, rule)| {
        rule.deduction == deduction_code && is_within_range(monthly_amount, &rule.emp_amount)
    })
}
