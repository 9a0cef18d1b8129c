//! Contract normalization.
//!
//! Turns raw option chain tables (header labels + rows of text cells) into
//! [`Contract`] values. The header is resolved once into a [`TableSchema`];
//! every row is then parsed against fixed column indices.
//!
//! A row with any unparsable field is rejected whole, logged, and recorded in
//! the [`NormalizationReport`]. The batch always continues.

mod schema;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Contract, ContractField, ContractSet};

pub use schema::{ColumnLabels, TableSchema};

/// Structural errors that make a whole table unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A requested column label is not in the header.
    #[error("Column '{label}' not found in table header {header:?}")]
    MissingColumn {
        /// Label that was looked up.
        label: String,
        /// Header that was searched.
        header: Vec<String>,
    },
}

/// Why a single field failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    /// Row is shorter than the column index.
    #[error("missing cell at column {column}")]
    MissingCell {
        /// Column index from the schema.
        column: usize,
    },

    /// Cell text is not a number.
    #[error("'{text}' is not a number")]
    NotNumeric {
        /// Raw cell text.
        text: String,
    },

    /// Cell parsed to a negative value.
    #[error("negative value {value}")]
    Negative {
        /// Parsed value.
        value: Decimal,
    },

    /// Cell parsed to a value no quote can reach.
    #[error("value {value} exceeds {limit}")]
    OutOfRange {
        /// Parsed value.
        value: Decimal,
        /// Largest accepted value.
        limit: Decimal,
    },
}

/// Which table of the option chain a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainSide {
    /// Calls table.
    Calls,
    /// Puts table.
    Puts,
}

impl std::fmt::Display for ChainSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calls => write!(f, "calls"),
            Self::Puts => write!(f, "puts"),
        }
    }
}

/// One field of one row that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRejection {
    /// Source table.
    pub side: ChainSide,
    /// Zero-based row index within the table body.
    pub row: usize,
    /// Field that failed.
    pub field: ContractField,
    /// Failure reason.
    pub error: FieldError,
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} row {}: {} {}",
            self.side, self.row, self.field, self.error
        )
    }
}

/// Per-document normalization outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Rows turned into contracts.
    pub accepted_rows: usize,
    /// Rows dropped because at least one field failed.
    pub rejected_rows: usize,
    /// Every failed field, in row order.
    pub rejections: Vec<RowRejection>,
}

impl NormalizationReport {
    /// Whether every row was accepted.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected_rows == 0
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.accepted_rows += other.accepted_rows;
        self.rejected_rows += other.rejected_rows;
        self.rejections.extend(other.rejections);
    }
}

/// Contracts from one table plus the report for that table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    /// Contracts built from accepted rows, in source order.
    pub contracts: Vec<Contract>,
    /// Rejections for this table.
    pub report: NormalizationReport,
}

/// Largest strike, bid or ask accepted from a document.
pub const MAX_CELL_VALUE: Decimal = rust_decimal_macros::dec!(1_000_000_000_000);

/// Drop commas that group the integer part in threes (`1,234.5`).
///
/// `None` when commas appear anywhere else.
fn strip_thousands_separators(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }

    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    if fraction.contains(',') {
        return None;
    }

    let mut groups = integer.trim_start_matches(['+', '-']).split(',');
    let leading = groups.next().unwrap_or_default();
    let grouped = (1..=3).contains(&leading.len()) && groups.all(|g| g.len() == 3);

    grouped.then(|| text.replace(',', ""))
}

/// Parse one cell as a non-negative decimal no larger than [`MAX_CELL_VALUE`].
///
/// Surrounding whitespace and thousands separators are ignored.
pub fn parse_cell(text: &str) -> Result<Decimal, FieldError> {
    let trimmed = text.trim();
    let not_numeric = || FieldError::NotNumeric {
        text: trimmed.to_string(),
    };

    let cleaned = strip_thousands_separators(trimmed).ok_or_else(not_numeric)?;
    let value = Decimal::from_str(&cleaned).map_err(|_| not_numeric())?;

    if value < Decimal::ZERO {
        return Err(FieldError::Negative { value });
    }
    if value > MAX_CELL_VALUE {
        return Err(FieldError::OutOfRange {
            value,
            limit: MAX_CELL_VALUE,
        });
    }
    Ok(value)
}

impl TableSchema {
    /// Normalize rows of one table against this schema.
    pub fn normalize_rows<S: AsRef<str>>(
        &self,
        side: ChainSide,
        rows: &[Vec<S>],
    ) -> NormalizedTable {
        let mut table = NormalizedTable::default();

        for (index, row) in rows.iter().enumerate() {
            let mut parsed = [Decimal::ZERO; 3];
            let mut failed = Vec::new();

            for (slot, field) in ContractField::ALL.iter().enumerate() {
                let column = self.column(*field);
                let result = row
                    .get(column)
                    .ok_or(FieldError::MissingCell { column })
                    .and_then(|cell| parse_cell(cell.as_ref()));

                match result {
                    Ok(value) => parsed[slot] = value,
                    Err(error) => failed.push(RowRejection {
                        side,
                        row: index,
                        field: *field,
                        error,
                    }),
                }
            }

            if failed.is_empty() {
                let [strike, bid, ask] = parsed;
                table.contracts.push(Contract::new(strike, bid, ask));
                table.report.accepted_rows += 1;
            } else {
                for rejection in &failed {
                    tracing::warn!(
                        side = %rejection.side,
                        row = rejection.row,
                        field = %rejection.field,
                        error = %rejection.error,
                        "Rejected option chain row"
                    );
                }
                table.report.rejected_rows += 1;
                table.report.rejections.extend(failed);
            }
        }

        table
    }
}

/// Resolve `header` against `labels` and normalize `rows` in one call.
pub fn normalize<H, S>(
    header: &[H],
    rows: &[Vec<S>],
    labels: &ColumnLabels,
    side: ChainSide,
) -> Result<NormalizedTable, NormalizeError>
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    let schema = TableSchema::resolve(header, labels)?;
    Ok(schema.normalize_rows(side, rows))
}

/// Normalize the calls and puts tables of one document.
///
/// Both tables share `header`, so the schema is resolved once.
pub fn normalize_chain<H, S>(
    header: &[H],
    call_rows: &[Vec<S>],
    put_rows: &[Vec<S>],
    labels: &ColumnLabels,
) -> Result<(ContractSet, NormalizationReport), NormalizeError>
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    let schema = TableSchema::resolve(header, labels)?;
    let calls = schema.normalize_rows(ChainSide::Calls, call_rows);
    let puts = schema.normalize_rows(ChainSide::Puts, put_rows);

    let mut report = calls.report;
    report.merge(puts.report);

    Ok((ContractSet::new(calls.contracts, puts.contracts), report))
}
