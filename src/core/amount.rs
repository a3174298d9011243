//! Amount parsing, range matching and pay-period conversion
//!
//! Rule amounts are written either as a single number (`"65"`) or as an
//! inclusive range (`"65-65.5"`). Monthly amounts are compared with plain
//! `f64` semantics: exact values use `==`, ranges use `min <= v <= max` with
//! the bounds in the order they were written.

/// Bi-weekly pay periods per year
pub const PAY_PERIODS_PER_YEAR: f64 = 26.0;

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

const RANGE_SEPARATOR: char = '-';

/// Parsed form of a rule amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountSpec {
    /// Empty amount
    Any,
    /// Single value, matched by exact equality
    Exact(f64),
    /// Inclusive range, bounds kept in written order
    Range { min: f64, max: f64 },
}

impl AmountSpec {
    /// Parse a rule amount, returning `None` when it has an invalid shape
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return Some(AmountSpec::Any);
        }
        if let Some(value) = parse_number(text) {
            return Some(AmountSpec::Exact(value));
        }

        let mut parts = text.split(RANGE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(min), Some(max), None) => Some(AmountSpec::Range {
                min: parse_number(min)?,
                max: parse_number(max)?,
            }),
            _ => None,
        }
    }

    /// True for ranges that can never contain a value
    pub fn is_inverted(&self) -> bool {
        matches!(self, AmountSpec::Range { min, max } if min > max)
    }
}

/// Parse a single finite decimal token, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Check that a rule amount is empty, a number, or a `min-max` range
pub fn is_valid_amount(text: &str) -> bool {
    AmountSpec::parse(text).is_some()
}

/// Check whether `value` satisfies a rule amount
///
/// Without a hyphen the amount must equal `value` exactly. With a hyphen it
/// is split into `min` and `max` as written and `min <= value <= max` must
/// hold. Anything unparseable, including the empty string, matches nothing.
pub fn is_within_range(value: f64, rule_amount: &str) -> bool {
    if !rule_amount.contains(RANGE_SEPARATOR) {
        return parse_number(rule_amount).is_some_and(|exact| value == exact);
    }

    let mut parts = rule_amount.split(RANGE_SEPARATOR);
    let min = parts.next().and_then(parse_number);
    let max = parts.next().and_then(parse_number);
    match (min, max) {
        (Some(min), Some(max)) => min <= value && value <= max,
        _ => false,
    }
}

/// Convert a bi-weekly amount to its monthly equivalent (`amount * 26 / 12`)
///
/// No rounding is applied here; round only when formatting.
pub fn convert_bi_weekly_to_monthly(amount: f64) -> f64 {
    amount * PAY_PERIODS_PER_YEAR / MONTHS_PER_YEAR
}

/// Round to cents, ties away from zero
pub fn round_to_cents(amount: f64) -> f64 {
    let cents = (amount * 100.0).round();
    if cents.is_finite() {
        cents / 100.0
    } else {
        amount
    }
}

/// Format a monthly amount with exactly two decimals
///
/// Half-cent ties round up (`1.625` becomes `"1.63"`).
pub fn format_monthly(amount: f64) -> String {
    format!("{:.2}", round_to_cents(amount))
}
