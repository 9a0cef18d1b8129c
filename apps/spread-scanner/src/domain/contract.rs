//! Option Contract Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numeric field extracted from an option chain row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractField {
    /// Strike price.
    Strike,
    /// Best bid.
    Bid,
    /// Best ask.
    Ask,
}

impl ContractField {
    /// All fields a contract is built from, in schema order.
    pub const ALL: [Self; 3] = [Self::Strike, Self::Bid, Self::Ask];

    /// Default column label on an option chain page.
    #[must_use]
    pub const fn default_label(&self) -> &'static str {
        match self {
            Self::Strike => "Strike",
            Self::Bid => "Bid",
            Self::Ask => "Ask",
        }
    }
}

impl std::fmt::Display for ContractField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strike => write!(f, "strike"),
            Self::Bid => write!(f, "bid"),
            Self::Ask => write!(f, "ask"),
        }
    }
}

/// A priced option contract.
///
/// Only the three numbers the spread evaluator needs. Values are expected to
/// be non-negative; `bid <= ask` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Strike price.
    pub strike: Decimal,
    /// Best bid.
    pub bid: Decimal,
    /// Best ask.
    pub ask: Decimal,
}

impl Contract {
    /// Create a new contract.
    #[must_use]
    pub const fn new(strike: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self { strike, bid, ask }
    }

    /// Mid price, used as the estimated premium paid for the leg.
    ///
    /// `None` when `bid + ask` overflows.
    #[must_use]
    pub fn mid(&self) -> Option<Decimal> {
        self.bid
            .checked_add(self.ask)
            .and_then(|sum| sum.checked_div(Decimal::TWO))
    }
}

/// Calls and puts read from one option chain document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSet {
    /// Call contracts, in source order.
    pub calls: Vec<Contract>,
    /// Put contracts, in source order.
    pub puts: Vec<Contract>,
}

impl ContractSet {
    /// Create a new contract set.
    #[must_use]
    pub const fn new(calls: Vec<Contract>, puts: Vec<Contract>) -> Self {
        Self { calls, puts }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn mid_is_average_of_bid_and_ask() {
        let contract = Contract::new(dec!(30), dec!(1), dec!(1.2));
        assert_eq!(contract.mid(), Some(dec!(1.1)));
    }

    #[test]
    fn mid_tolerates_crossed_quotes() {
        let contract = Contract::new(dec!(30), dec!(2), dec!(1));
        assert_eq!(contract.mid(), Some(dec!(1.5)));
    }

    #[test]
    fn mid_overflow_is_none() {
        let contract = Contract::new(dec!(30), Decimal::MAX, Decimal::MAX);
        assert_eq!(contract.mid(), None);
    }

    #[test]
    fn field_labels() {
        let labels: Vec<_> = ContractField::ALL.iter().map(|f| f.default_label()).collect();
        assert_eq!(labels, ["Strike", "Bid", "Ask"]);
        assert_eq!(ContractField::Ask.to_string(), "ask");
    }
}
