//! Domain Layer
//!
//! Pure, synchronous business logic with no infrastructure dependencies.
//!
//! - [`contract`]: Normalized option contracts and the calls/puts set
//! - [`constraints`]: Immutable filter limits supplied once per run
//! - [`spread`]: Call × put pair evaluation (cost, break-evens, max loss)
//! - [`price`]: Price levels relative to the current underlying price

pub mod constraints;
pub mod contract;
pub mod price;
pub mod spread;

pub use constraints::{Constraints, ConstraintsBuilder, ConstraintsError};
pub use contract::{Contract, ContractField, ContractSet};
pub use price::{PriceLevel, display_amount, format_price};
pub use spread::{SpreadEvaluation, SpreadEvaluator, SpreadResult, evaluate_spreads, leg_cost};
