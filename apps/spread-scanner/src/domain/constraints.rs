//! Scan Constraints Value Object
//!
//! Limits applied to every call/put pair. An unset limit is unbounded, which
//! under strict comparison behaves exactly like ±infinity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintsError {
    /// Current underlying price is negative.
    #[error("Current price must not be negative, got {price}")]
    NegativePrice {
        /// Offending price.
        price: Decimal,
    },

    /// Floor is not below the ceiling, so nothing can ever match.
    #[error("Floor ({floor}) must be below ceiling ({ceiling})")]
    InvertedBounds {
        /// Requested floor.
        floor: Decimal,
        /// Requested ceiling.
        ceiling: Decimal,
    },
}

/// Immutable filter limits for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    max_cost: Option<Decimal>,
    ceiling: Option<Decimal>,
    floor: Option<Decimal>,
    current_price: Decimal,
}

impl Constraints {
    /// Unbounded constraints at the given underlying price.
    #[must_use]
    pub const fn unbounded(current_price: Decimal) -> Self {
        Self {
            max_cost: None,
            ceiling: None,
            floor: None,
            current_price,
        }
    }

    /// Start building constraints at the given underlying price.
    #[must_use]
    pub const fn builder(current_price: Decimal) -> ConstraintsBuilder {
        ConstraintsBuilder {
            inner: Self::unbounded(current_price),
        }
    }

    /// Maximum total premium (exclusive), `None` when unbounded.
    #[must_use]
    pub const fn max_cost(&self) -> Option<Decimal> {
        self.max_cost
    }

    /// Ceiling the upper break-even must stay below, `None` when unbounded.
    #[must_use]
    pub const fn ceiling(&self) -> Option<Decimal> {
        self.ceiling
    }

    /// Floor the lower break-even must stay above, `None` when unbounded.
    #[must_use]
    pub const fn floor(&self) -> Option<Decimal> {
        self.floor
    }

    /// Current underlying price.
    #[must_use]
    pub const fn current_price(&self) -> Decimal {
        self.current_price
    }

    /// Strict inclusion test for one pair.
    #[must_use]
    pub fn admits(
        &self,
        cost: Decimal,
        floor_breakeven: Decimal,
        ceiling_breakeven: Decimal,
    ) -> bool {
        self.ceiling.is_none_or(|c| ceiling_breakeven < c)
            && self.floor.is_none_or(|f| floor_breakeven > f)
            && self.max_cost.is_none_or(|m| cost < m)
    }
}

/// Builder for [`Constraints`].
#[derive(Debug, Clone, Copy)]
pub struct ConstraintsBuilder {
    inner: Constraints,
}

impl ConstraintsBuilder {
    /// Set the maximum total premium.
    #[must_use]
    pub const fn max_cost(mut self, max_cost: Option<Decimal>) -> Self {
        self.inner.max_cost = max_cost;
        self
    }

    /// Set the price ceiling.
    #[must_use]
    pub const fn ceiling(mut self, ceiling: Option<Decimal>) -> Self {
        self.inner.ceiling = ceiling;
        self
    }

    /// Set the price floor.
    #[must_use]
    pub const fn floor(mut self, floor: Option<Decimal>) -> Self {
        self.inner.floor = floor;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<Constraints, ConstraintsError> {
        let c = self.inner;
        if c.current_price < Decimal::ZERO {
            return Err(ConstraintsError::NegativePrice {
                price: c.current_price,
            });
        }
        if let (Some(floor), Some(ceiling)) = (c.floor, c.ceiling) {
            if floor >= ceiling {
                return Err(ConstraintsError::InvertedBounds { floor, ceiling });
            }
        }
        Ok(c)
    }
}
