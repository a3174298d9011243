//! CSV format handling for payroll rows, enriched output and rule files
//!
//! This module centralizes all CSV format concerns, providing:
//! - Reader configuration shared by the sync and async readers
//! - Conversion from raw CSV fields to ordered records
//! - Enriched output serialization
//! - Rule file import and export
//!
//! Payroll input is split naively on commas: quotes are not interpreted.
//! On output a value containing a comma is wrapped in double quotes, and
//! embedded quotes are written as-is.

use crate::types::record::{
    BI_WEEKLY_AMOUNT_COLUMN, DEDUCTION_COLUMN, INSURANCE_COLUMNS, MONTHLY_AMOUNT_COLUMN,
};
use crate::types::{EnrichError, OutputRecord, Record, Rule};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use std::borrow::Cow;
use std::io::{Read, Write};

/// Columns every payroll input must carry
pub const REQUIRED_COLUMNS: [&str; 2] = [DEDUCTION_COLUMN, BI_WEEKLY_AMOUNT_COLUMN];

/// Parsed payroll file: header plus non-blank rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

/// Reader settings for payroll input
///
/// Quoting is disabled so every comma splits a field, fields are trimmed,
/// and rows may be shorter or longer than the header.
pub fn payroll_reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(true)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true);
    builder
}

/// Fail unless the header carries every required column
pub fn check_required_columns(headers: &[String]) -> Result<(), EnrichError> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|required| !headers.iter().any(|h| h == *required))
    {
        Some(missing) => Err(EnrichError::missing_column(missing)),
        None => Ok(()),
    }
}

/// Pair raw fields with the header
///
/// Missing trailing fields become empty strings; fields beyond the header
/// are ignored.
pub fn record_from_fields<'a, I>(headers: &[String], fields: I) -> Record
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fields = fields.into_iter();
    Record::from_pairs(
        headers
            .iter()
            .map(|header| (header.as_str(), fields.next().unwrap_or_default())),
    )
}

/// Parse a whole payroll CSV from any reader
pub fn read_payroll_csv<R: Read>(input: R) -> Result<InputTable, EnrichError> {
    let mut reader = payroll_reader_builder().from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    check_required_columns(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = record_from_fields(&headers, result?.iter());
        if !record.is_blank() {
            rows.push(record);
        }
    }

    Ok(InputTable { headers, rows })
}

/// Header of the enriched file for a given input header
///
/// The bi-weekly column is renamed in place; insurance columns the input
/// lacked are appended in their canonical order.
pub fn output_headers(input_headers: &[String]) -> Vec<String> {
    let mut headers: Vec<String> = input_headers
        .iter()
        .map(|header| {
            if header == BI_WEEKLY_AMOUNT_COLUMN {
                MONTHLY_AMOUNT_COLUMN.to_string()
            } else {
                header.clone()
            }
        })
        .collect();

    for column in INSURANCE_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            headers.push(column.to_string());
        }
    }

    headers
}

/// Wrap a value in double quotes when it contains a comma
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(',') {
        Cow::Owned(format!("\"{}\"", value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Write enriched records as CSV
///
/// Values are taken by position, so repeated column names keep their own
/// values. Columns with a blank header are dropped, and rows whose remaining
/// values are all empty are skipped.
///
/// # Arguments
///
/// * `headers` - Output column order, usually from [`output_headers`]
/// * `records` - Enriched rows laid out like `headers`
/// * `output` - Destination writer
pub fn write_records_csv(
    headers: &[String],
    records: &[OutputRecord],
    output: &mut dyn Write,
) -> Result<(), EnrichError> {
    let columns: Vec<(usize, &str)> = headers
        .iter()
        .map(String::as_str)
        .enumerate()
        .filter(|(_, header)| !header.trim().is_empty())
        .collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(columns.iter().map(|(_, c)| escape_field(c).into_owned()))?;

    for output_record in records {
        let values: Vec<&str> = columns
            .iter()
            .map(|(index, _)| output_record.record.value_at(*index).unwrap_or_default())
            .collect();
        if values.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        writer.write_record(values.iter().map(|v| escape_field(v).into_owned()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a rule table from CSV
///
/// Expects the header `deduction,empAmount,carrier,coverage,level,plan`;
/// `level` and `plan` may be omitted. Rule order follows file order.
pub fn read_rules_csv<R: Read>(input: R) -> Result<Vec<Rule>, EnrichError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    reader
        .deserialize::<Rule>()
        .map(|result| result.map_err(EnrichError::from))
        .collect()
}

/// Write a rule table as CSV in the format accepted by [`read_rules_csv`]
pub fn write_rules_csv(rules: &[Rule], output: &mut dyn Write) -> Result<(), EnrichError> {
    let mut writer = WriterBuilder::new().from_writer(output);
    for rule in rules {
        writer.serialize(rule)?;
    }
    writer.flush()?;
    Ok(())
}
