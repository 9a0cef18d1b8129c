//! Price level relative to the current underlying price.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Render an amount with at least two decimal places and no rounding.
///
/// `2` prints as `2.00`; `1.125` keeps all three places.
#[must_use]
pub fn display_amount(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() <= 2 {
        format!("{normalized:.2}")
    } else {
        normalized.to_string()
    }
}

/// A price paired with its whole-percent deviation from the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Raw price.
    pub price: Decimal,
    /// `floor(100 * (price - current) / current)`; `None` when the current
    /// price is zero and the percentage is undefined.
    pub percent_from_current: Option<i64>,
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.percent_from_current {
            Some(pct) => write!(f, "{} ({}%)", display_amount(self.price), pct),
            None => write!(f, "{} (n/a)", display_amount(self.price)),
        }
    }
}

/// Pair a price with its floored percentage deviation from `current_price`.
///
/// Rounds toward negative infinity, so a deviation of -9.5% reports -10.
/// The percentage is `None` when it is undefined or does not fit.
#[must_use]
pub fn format_price(price: Decimal, current_price: Decimal) -> PriceLevel {
    let percent_from_current = price
        .checked_sub(current_price)
        .and_then(|diff| diff.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|scaled| scaled.checked_div(current_price))
        .and_then(|pct| pct.floor().to_i64());

    PriceLevel {
        price,
        percent_from_current,
    }
}
