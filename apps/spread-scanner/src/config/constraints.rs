//! Constraint defaults from the config file.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::{Constraints, ConstraintsError};

/// Constraint values; a missing limit is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintsConfig {
    /// Maximum total premium.
    #[serde(default)]
    pub max_cost: Option<Decimal>,
    /// Upper break-even ceiling.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    /// Lower break-even floor.
    #[serde(default)]
    pub floor: Option<Decimal>,
    /// Current underlying price.
    #[serde(default = "default_current_price")]
    pub current_price: Decimal,
}

impl ConstraintsConfig {
    /// Build validated domain constraints.
    pub fn to_constraints(&self) -> Result<Constraints, ConstraintsError> {
        Constraints::builder(self.current_price)
            .max_cost(self.max_cost)
            .ceiling(self.ceiling)
            .floor(self.floor)
            .build()
    }
}

impl Default for ConstraintsConfig {
    fn default() -> Self {
        Self {
            max_cost: None,
            ceiling: None,
            floor: None,
            current_price: default_current_price(),
        }
    }
}

/// UBER close on 2019-12-06, matching the default URL.
fn default_current_price() -> Decimal {
    dec!(27.86)
}
