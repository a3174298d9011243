//! Row transformation
//!
//! Turns one payroll row into one enriched row. The bi-weekly amount column
//! is replaced in place by the monthly amount, and the insurance columns are
//! filled from the first matching rule.

use crate::core::amount::{convert_bi_weekly_to_monthly, format_monthly, parse_number};
use crate::core::matcher::find_rule;
use crate::types::record::{
    BI_WEEKLY_AMOUNT_COLUMN, CARRIER_COLUMN, COVERAGE_COLUMN, DEDUCTION_COLUMN,
    INSURANCE_COLUMNS, LEVEL_COLUMN, MONTHLY_AMOUNT_COLUMN, PLAN_COLUMN,
};
use crate::types::{MonthlyAmount, OutputRecord, Record, Rule};

/// Convert the raw bi-weekly text into a typed monthly amount
pub fn monthly_amount(raw: &str) -> MonthlyAmount {
    match parse_number(raw) {
        Some(bi_weekly) => MonthlyAmount::Converted(convert_bi_weekly_to_monthly(bi_weekly)),
        None => MonthlyAmount::Unparseable {
            raw: raw.to_string(),
        },
    }
}

/// Value used for rule matching: the monthly amount as written to the output
///
/// Matching runs on the 2-decimal figure, not on the unrounded conversion.
fn matching_amount(monthly: &MonthlyAmount) -> Option<f64> {
    monthly
        .value()
        .and_then(|amount| parse_number(&format_monthly(amount)))
}

/// Transform one input row against an ordered rule table
///
/// Pure function of its inputs; `row` is left untouched. Insurance columns
/// missing from the row are appended, empty unless a rule matched, so every
/// output row has the layout given by `output_headers`.
pub fn transform(row: &Record, rules: &[Rule]) -> OutputRecord {
    let mut record = Record::default();
    let mut monthly = None;

    for (column, value) in row.iter() {
        if column == BI_WEEKLY_AMOUNT_COLUMN {
            let amount = monthly_amount(value);
            record.push(MONTHLY_AMOUNT_COLUMN, amount.formatted());
            monthly = Some(amount);
        } else {
            record.push(column, value.to_string());
        }
    }

    for column in INSURANCE_COLUMNS {
        if record.get(column).is_none() {
            record.push(column, String::new());
        }
    }

    let monthly = monthly.unwrap_or(MonthlyAmount::Unparseable { raw: String::new() });
    let deduction = row.get(DEDUCTION_COLUMN).unwrap_or_default();

    let matched = matching_amount(&monthly).and_then(|amount| find_rule(rules, deduction, amount));
    if let Some((_, rule)) = matched {
        record.set(CARRIER_COLUMN, &rule.carrier);
        record.set(COVERAGE_COLUMN, &rule.coverage);
        record.set(LEVEL_COLUMN, &rule.level);
        record.set(PLAN_COLUMN, &rule.plan);
    }

    OutputRecord {
        record,
        monthly,
        matched_rule: matched.map(|(index, _)| index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<Rule> {
        vec![
            Rule::new("2400", "130", "Aetna", "Employee Only", "1", "PPO"),
            Rule::new("2410", "21.67", "Delta Dental", "Employee Only", "1", ""),
            Rule::new("2410", "21.6-21.7", "Guardian", "Employee Only", "2", ""),
        ]
    }

    fn row(deduction: &str, amount: &str) -> Record {
        Record::from_pairs([
            ("Employee", "Doe, J"),
            ("Deduction", deduction),
            ("Empe Amt/Pct", amount),
            ("Hlth Ins Carrie", ""),
            ("Hlth Ins Cvrage", ""),
            ("Hlth Ins Level", ""),
            ("Hlth Ins Plan", ""),
        ])
    }

    #[test]
    fn test_amount_column_renamed_in_place() {
        let output = transform(&row("2400", "60"), &rules());
        let columns: Vec<_> = output.record.columns().collect();
        assert_eq!(
            columns,
            vec![
                "Employee",
                "Deduction",
                "Empe Amt/Pct Montly",
                "Hlth Ins Carrie",
                "Hlth Ins Cvrage",
                "Hlth Ins Level",
                "Hlth Ins Plan",
            ]
        );
        assert_eq!(output.record.get("Empe Amt/Pct Montly"), Some("130.00"));
        assert_eq!(output.record.get("Employee"), Some("Doe, J"));
    }

    #[test]
    fn test_matched_row_gets_insurance_fields() {
        let output = transform(&row("2400", "60"), &rules());
        assert_eq!(output.matched_rule, Some(0));
        assert_eq!(output.record.get("Hlth Ins Carrie"), Some("Aetna"));
        assert_eq!(output.record.get("Hlth Ins Cvrage"), Some("Employee Only"));
        assert_eq!(output.record.get("Hlth Ins Level"), Some("1"));
        assert_eq!(output.record.get("Hlth Ins Plan"), Some("PPO"));
    }

    #[test]
    fn test_matching_uses_rounded_amount() {
        // 10 * 26 / 12 = 21.666..., which only equals the exact rule once rounded
        let output = transform(&row("2410", "10"), &rules());
        assert_eq!(output.matched_rule, Some(1));
        assert_eq!(output.record.get("Hlth Ins Carrie"), Some("Delta Dental"));
        assert!(matches!(output.monthly, MonthlyAmount::Converted(v) if v != 21.67));
    }

    #[test]
    fn test_half_cent_tie_matches_rounded_up_rule() {
        // 3.75 * 26 / 12 = 8.125 exactly
        let rules = vec![Rule::new("2400", "8.13", "Aetna", "Employee Only", "1", "PPO")];
        let output = transform(&row("2400", "3.75"), &rules);
        assert_eq!(output.record.get("Empe Amt/Pct Montly"), Some("8.13"));
        assert_eq!(output.matched_rule, Some(0));
        assert_eq!(output.record.get("Hlth Ins Carrie"), Some("Aetna"));
    }

    #[test]
    fn test_unmatched_row_keeps_input_values() {
        let mut input = row("2400", "150");
        input.set("Hlth Ins Carrie", "Legacy Carrier");
        let output = transform(&input, &rules());

        assert_eq!(output.matched_rule, None);
        assert_eq!(output.record.get("Empe Amt/Pct Montly"), Some("325.00"));
        assert_eq!(output.record.get("Hlth Ins Carrie"), Some("Legacy Carrier"));
        assert_eq!(output.record.get("Hlth Ins Cvrage"), Some(""));
    }

    #[test]
    fn test_unparseable_amount_is_typed_and_rendered_as_nan() {
        let output = transform(&row("2400", "n/a"), &rules());
        assert_eq!(
            output.monthly,
            MonthlyAmount::Unparseable {
                raw: "n/a".to_string()
            }
        );
        assert_eq!(output.record.get("Empe Amt/Pct Montly"), Some("NaN"));
        assert_eq!(output.matched_rule, None);
        assert_eq!(output.record.get("Hlth Ins Carrie"), Some(""));
    }

    #[test]
    fn test_empty_amount_is_unparseable() {
        let output = transform(&row("2400", ""), &rules());
        assert!(output.monthly.is_unparseable());
        assert_eq!(output.record.get("Empe Amt/Pct Montly"), Some("NaN"));
    }

    #[test]
    fn test_missing_insurance_columns_are_appended_on_match() {
        let input = Record::from_pairs([("Deduction", "2400"), ("Empe Amt/Pct", "60")]);
        let output = transform(&input, &rules());
        let columns: Vec<_> = output.record.columns().collect();
        assert_eq!(
            columns,
            vec![
                "Deduction",
                "Empe Amt/Pct Montly",
                "Hlth Ins Carrie",
                "Hlth Ins Cvrage",
                "Hlth Ins Level",
                "Hlth Ins Plan",
            ]
        );
    }

    #[test]
    fn test_missing_insurance_columns_are_appended_empty_when_unmatched() {
        let input = Record::from_pairs([("Deduction", "2400"), ("Empe Amt/Pct", "150")]);
        let output = transform(&input, &rules());
        assert_eq!(output.matched_rule, None);
        assert_eq!(output.record.len(), 6);
        assert_eq!(output.record.get("Hlth Ins Plan"), Some(""));
    }

    #[test]
    fn test_input_row_is_not_modified() {
        let input = row("2400", "60");
        let before = input.clone();
        let _ = transform(&input, &rules());
        assert_eq!(input, before);
    }
}
