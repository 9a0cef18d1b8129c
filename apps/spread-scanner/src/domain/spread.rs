//! Straddle/strangle pair evaluation.
//!
//! Every call is paired with every put. For each pair:
//!
//! - `cost = mid(call) + mid(put)`
//! - `ceiling_breakeven = call.strike + cost`
//! - `floor_breakeven = put.strike - cost`
//! - `max_loss = cost - max(0, put.strike - call.strike)`
//!
//! Pairs pass the filter when `ceiling_breakeven < ceiling`,
//! `floor_breakeven > floor` and `cost < max_cost`. `max_loss` is reported
//! as-is and goes negative when the strike overlap exceeds the premium.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constraints::Constraints;
use super::contract::Contract;
use super::price::{PriceLevel, format_price};

/// Estimated premium paid for one leg (the mid price).
#[must_use]
pub fn leg_cost(contract: &Contract) -> Option<Decimal> {
    contract.mid()
}

/// A call/put pair that passed the constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadResult {
    /// Strike of the call leg.
    pub call_strike: Decimal,
    /// Strike of the put leg.
    pub put_strike: Decimal,
    /// Total premium for both legs.
    pub cost: Decimal,
    /// Underlying price below which the put covers the premium.
    pub floor_breakeven: Decimal,
    /// Underlying price above which the call covers the premium.
    pub ceiling_breakeven: Decimal,
    /// Worst-case loss; negative when the strike overlap exceeds the cost.
    pub max_loss: Decimal,
}

impl SpreadResult {
    /// Compute the economics of holding `call` and `put` together.
    ///
    /// `None` when any intermediate value overflows `Decimal`.
    #[must_use]
    pub fn from_pair(call: &Contract, put: &Contract) -> Option<Self> {
        let cost = leg_cost(call)?.checked_add(leg_cost(put)?)?;
        let overlap = put.strike.checked_sub(call.strike)?.max(Decimal::ZERO);

        Some(Self {
            call_strike: call.strike,
            put_strike: put.strike,
            cost,
            floor_breakeven: put.strike.checked_sub(cost)?,
            ceiling_breakeven: call.strike.checked_add(cost)?,
            max_loss: cost.checked_sub(overlap)?,
        })
    }

    /// Lower break-even relative to the current price.
    #[must_use]
    pub fn floor_level(&self, current_price: Decimal) -> PriceLevel {
        format_price(self.floor_breakeven, current_price)
    }

    /// Upper break-even relative to the current price.
    #[must_use]
    pub fn ceiling_level(&self, current_price: Decimal) -> PriceLevel {
        format_price(self.ceiling_breakeven, current_price)
    }
}

/// Output of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadEvaluation {
    /// Matching pairs, calls outer and puts inner.
    pub results: Vec<SpreadResult>,
    /// Number of matching pairs.
    pub match_count: usize,
    /// Number of pairs examined.
    pub pairs_scanned: usize,
    /// Pairs skipped because their arithmetic overflowed.
    pub overflowed_pairs: usize,
}

/// Evaluate every call × put pair against `constraints`.
#[must_use]
pub fn evaluate_spreads(
    calls: &[Contract],
    puts: &[Contract],
    constraints: &Constraints,
) -> SpreadEvaluation {
    let mut evaluation = SpreadEvaluation::default();

    for call in calls {
        for put in puts {
            evaluation.pairs_scanned += 1;
            match SpreadResult::from_pair(call, put) {
                Some(r) if constraints.admits(r.cost, r.floor_breakeven, r.ceiling_breakeven) => {
                    evaluation.results.push(r);
                }
                Some(_) => {}
                None => {
                    tracing::warn!(
                        call_strike = %call.strike,
                        put_strike = %put.strike,
                        "Skipped pair whose cost overflows"
                    );
                    evaluation.overflowed_pairs += 1;
                }
            }
        }
    }
    evaluation.match_count = evaluation.results.len();

    tracing::debug!(
        calls = calls.len(),
        puts = puts.len(),
        pairs_scanned = evaluation.pairs_scanned,
        matches = evaluation.match_count,
        "Evaluated spreads"
    );

    evaluation
}

/// Evaluator bound to one set of constraints.
#[derive(Debug, Clone, Copy)]
pub struct SpreadEvaluator {
    constraints: Constraints,
}

impl SpreadEvaluator {
    /// Create an evaluator for the given constraints.
    #[must_use]
    pub const fn new(constraints: Constraints) -> Self {
        Self { constraints }
    }

    /// The constraints in effect.
    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Evaluate all pairs.
    #[must_use]
    pub fn evaluate(&self, calls: &[Contract], puts: &[Contract]) -> SpreadEvaluation {
        evaluate_spreads(calls, puts, &self.constraints)
    }
}
