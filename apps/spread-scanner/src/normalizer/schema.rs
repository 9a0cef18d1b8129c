//! Column schema resolved once per document.

use serde::{Deserialize, Serialize};

use super::NormalizeError;
use crate::domain::ContractField;

/// Header labels to look up for each contract field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLabels {
    /// Strike column label.
    #[serde(default = "default_strike_label")]
    pub strike_label: String,
    /// Bid column label.
    #[serde(default = "default_bid_label")]
    pub bid_label: String,
    /// Ask column label.
    #[serde(default = "default_ask_label")]
    pub ask_label: String,
}

impl ColumnLabels {
    /// Label configured for `field`.
    #[must_use]
    pub fn label(&self, field: ContractField) -> &str {
        match field {
            ContractField::Strike => &self.strike_label,
            ContractField::Bid => &self.bid_label,
            ContractField::Ask => &self.ask_label,
        }
    }
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            strike_label: default_strike_label(),
            bid_label: default_bid_label(),
            ask_label: default_ask_label(),
        }
    }
}

fn default_strike_label() -> String {
    ContractField::Strike.default_label().to_string()
}

fn default_bid_label() -> String {
    ContractField::Bid.default_label().to_string()
}

fn default_ask_label() -> String {
    ContractField::Ask.default_label().to_string()
}

/// Column index for each contract field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    strike: usize,
    bid: usize,
    ask: usize,
}

impl TableSchema {
    /// Locate every configured label in `header`.
    ///
    /// Labels match after trimming whitespace; the first match wins.
    pub fn resolve<H: AsRef<str>>(
        header: &[H],
        labels: &ColumnLabels,
    ) -> Result<Self, NormalizeError> {
        let find = |field: ContractField| {
            let label = labels.label(field);
            header
                .iter()
                .position(|h| h.as_ref().trim() == label)
                .ok_or_else(|| NormalizeError::MissingColumn {
                    label: label.to_string(),
                    header: header.iter().map(|h| h.as_ref().to_string()).collect(),
                })
        };

        Ok(Self {
            strike: find(ContractField::Strike)?,
            bid: find(ContractField::Bid)?,
            ask: find(ContractField::Ask)?,
        })
    }

    /// Column index of `field`.
    #[must_use]
    pub const fn column(&self, field: ContractField) -> usize {
        match field {
            ContractField::Strike => self.strike,
            ContractField::Bid => self.bid,
            ContractField::Ask => self.ask,
        }
    }
}
