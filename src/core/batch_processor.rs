//! Batch processing
//!
//! Rule validation is strict and row handling is lenient: a single invalid
//! rule aborts the whole batch before any row is touched, while a row with a
//! bad amount is still emitted (with a typed unparseable amount) and never
//! stops the batch.

use crate::core::transformer::transform;
use crate::core::validator::validate_rules;
use crate::types::{EnrichError, MonthlyAmount, OutputRecord, Record, Rule};
use tracing::{debug, warn};

/// Counters describing the outcome of one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub unparseable: usize,
}

impl BatchSummary {
    /// Tally an already transformed batch
    pub fn from_outputs(outputs: &[OutputRecord]) -> Self {
        outputs.iter().fold(BatchSummary::default(), |mut summary, output| {
            summary.rows += 1;
            if output.is_matched() {
                summary.matched += 1;
            } else {
                summary.unmatched += 1;
            }
            if output.monthly.is_unparseable() {
                summary.unparseable += 1;
            }
            summary
        })
    }
}

/// Validate the rule table, then transform every row in input order
///
/// # Errors
///
/// Returns [`EnrichError::InvalidRules`] listing every invalid rule when any
/// rule fails validation. In that case no rows are transformed.
pub fn process_all(rows: &[Record], rules: &[Rule]) -> Result<Vec<OutputRecord>, EnrichError> {
    let failures = validate_rules(rules);
    if !failures.is_empty() {
        return Err(EnrichError::invalid_rules(failures));
    }

    let outputs = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let output = transform(row, rules);
            if let MonthlyAmount::Unparseable { raw } = &output.monthly {
                warn!(row = index + 1, amount = %raw, "Bi-weekly amount is not a number");
            } else if !output.is_matched() {
                debug!(row = index + 1, "No rule matched");
            }
            output
        })
        .collect();

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::default_rules;
    use crate::types::RuleViolation;
    use rstest::rstest;

    fn row(deduction: &str, amount: &str) -> Record {
        Record::from_pairs([
            ("Deduction", deduction),
            ("Empe Amt/Pct", amount),
            ("Hlth Ins Carrie", ""),
            ("Hlth Ins Cvrage", ""),
            ("Hlth Ins Level", ""),
            ("Hlth Ins Plan", ""),
        ])
    }

    #[test]
    fn test_outputs_follow_input_order() {
        let rows = vec![row("2400", "60"), row("2410", "10"), row("2420", "3")];
        let outputs = process_all(&rows, &default_rules()).unwrap();

        let carriers: Vec<_> = outputs
            .iter()
            .map(|o| o.record.get("Hlth Ins Carrie").unwrap())
            .collect();
        assert_eq!(carriers, vec!["Aetna", "Delta Dental", "VSP"]);
    }

    #[test]
    fn test_invalid_rule_aborts_batch() {
        let mut rules = default_rules();
        rules.insert(2, Rule::new("2400", "325", "", "Family", "1", ""));
        let rows = vec![row("2400", "60"), row("2400", "150")];

        let err = process_all(&rows, &rules).unwrap_err();
        assert_eq!(err.offending_rules(), vec![3]);
        match err {
            EnrichError::InvalidRules { failures } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].violations, vec![RuleViolation::MissingCarrier]);
            }
            other => panic!("Expected InvalidRules, got {:?}", other),
        }
    }

    #[test]
    fn test_every_invalid_rule_is_reported() {
        let rules = vec![
            Rule::new("", "130", "Aetna", "Employee Only", "1", ""),
            Rule::new("2400", "260", "Aetna", "Employee + Spouse", "1", ""),
            Rule::new("2400", "x-y", "Aetna", "", "1", ""),
        ];
        let err = process_all(&[row("2400", "60")], &rules).unwrap_err();
        assert_eq!(err.offending_rules(), vec![1, 3]);
        assert!(err.to_string().contains("Rule 1: Deduction code is required"));
        assert!(err
            .to_string()
            .contains("Rule 3: Amount must be a number or range, Coverage is required"));
    }

    #[test]
    fn test_bad_amount_does_not_abort_batch() {
        let rows = vec![row("2400", "60"), row("2400", "abc"), row("2420", "3")];
        let outputs = process_all(&rows, &default_rules()).unwrap();

        assert_eq!(outputs.len(), 3);
        assert!(outputs[0].is_matched());
        assert!(matches!(outputs[1].monthly, MonthlyAmount::Unparseable { .. }));
        assert_eq!(outputs[1].record.get("Empe Amt/Pct Montly"), Some("NaN"));
        assert!(outputs[2].is_matched());
    }

    #[rstest]
    #[case::unmatched_325("150", "325.00")]
    #[case::unmatched_inverted_range("300", "650.00")]
    fn test_default_table_leaves_medical_row_unmatched(
        #[case] amount: &str,
        #[case] expected_monthly: &str,
    ) {
        let outputs = process_all(&[row("2400", amount)], &default_rules()).unwrap();
        let output = &outputs[0];
        assert_eq!(output.record.get("Empe Amt/Pct Montly"), Some(expected_monthly));
        assert_eq!(output.matched_rule, None);
        for column in crate::types::record::INSURANCE_COLUMNS {
            assert_eq!(output.record.get(column), Some(""));
        }
    }

    #[test]
    fn test_empty_input_with_valid_rules() {
        assert!(process_all(&[], &default_rules()).unwrap().is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let rows = vec![
            row("2400", "60"),
            row("2400", "150"),
            row("2400", "abc"),
            row("2410", "10"),
        ];
        let outputs = process_all(&rows, &default_rules()).unwrap();
        let summary = BatchSummary::from_outputs(&outputs);
        assert_eq!(
            summary,
            BatchSummary {
                rows: 4,
                matched: 2,
                unmatched: 2,
                unparseable: 1,
            }
        );
    }
}
