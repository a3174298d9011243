//! Record types for payroll rows
//!
//! CSV columns are arbitrary, so a record is an ordered list of
//! `(column, value)` pairs. Only a handful of well-known columns are read by
//! the engine; everything else passes through untouched and in order.

/// Column holding the deduction code
pub const DEDUCTION_COLUMN: &str = "Deduction";

/// Column holding the bi-weekly employee amount in input rows
pub const BI_WEEKLY_AMOUNT_COLUMN: &str = "Empe Amt/Pct";

/// Column replacing [`BI_WEEKLY_AMOUNT_COLUMN`] in output rows
pub const MONTHLY_AMOUNT_COLUMN: &str = "Empe Amt/Pct Montly";

pub const CARRIER_COLUMN: &str = "Hlth Ins Carrie";
pub const COVERAGE_COLUMN: &str = "Hlth Ins Cvrage";
pub const LEVEL_COLUMN: &str = "Hlth Ins Level";
pub const PLAN_COLUMN: &str = "Hlth Ins Plan";

/// Insurance columns populated from a matching rule, in output order
pub const INSURANCE_COLUMNS: [&str; 4] =
    [CARRIER_COLUMN, COVERAGE_COLUMN, LEVEL_COLUMN, PLAN_COLUMN];

/// Ordered mapping from column name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Build a record from column/value pairs, keeping their order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Record {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of the first field named `column`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value at a column position
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(_, value)| value.as_str())
    }

    /// Iterate over `(column, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every value is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.trim().is_empty())
    }

    pub(crate) fn push(&mut self, column: &str, value: String) {
        self.fields.push((column.to_string(), value));
    }

    /// Overwrite `column` in place, or append it when absent
    pub(crate) fn set(&mut self, column: &str, value: &str) {
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self.push(column, value.to_string()),
        }
    }
}

/// Outcome of converting a row's bi-weekly amount
#[derive(Debug, Clone, PartialEq)]
pub enum MonthlyAmount {
    /// Monthly amount before rounding
    Converted(f64),

    /// The bi-weekly amount was not a number; `raw` is the original text
    Unparseable { raw: String },
}

impl MonthlyAmount {
    /// Text written to the monthly column
    ///
    /// Unparseable amounts render as `NaN`, which is what downstream
    /// consumers of the enriched file have always seen for bad input.
    pub fn formatted(&self) -> String {
        match self {
            MonthlyAmount::Converted(amount) => crate::core::amount::format_monthly(*amount),
            MonthlyAmount::Unparseable { .. } => "NaN".to_string(),
        }
    }

    /// Unrounded monthly value, if the input parsed
    pub fn value(&self) -> Option<f64> {
        match self {
            MonthlyAmount::Converted(amount) => Some(*amount),
            MonthlyAmount::Unparseable { .. } => None,
        }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, MonthlyAmount::Unparseable { .. })
    }
}

/// Enriched row produced by the row transformer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    /// Output fields in column order
    pub record: Record,

    /// Typed result of the amount conversion
    pub monthly: MonthlyAmount,

    /// Index of the rule that matched, if any
    pub matched_rule: Option<usize>,
}

impl OutputRecord {
    pub fn is_matched(&self) -> bool {
        self.matched_rule.is_some()
    }
}
