//! Admissibility of proportional two-sided deposits.

use crate::domain::{LiquidityDecision, LiquidityRequest, PoolState};

/// Decides whether a deposit matches the pool's price closely enough to
/// be added.
///
/// A deposit `(a, b)` is accepted iff both sides are finite positive
/// numbers and `|b/a − reserve_b/reserve_a|` is strictly below the
/// validator's tolerance. Acceptance adds both sides in full; there is no
/// partial application.
pub trait LiquidityValidator {
    /// Evaluates `request` against `pool` and explains the outcome.
    #[must_use]
    fn evaluate(&self, pool: &PoolState, request: &LiquidityRequest) -> LiquidityDecision;

    /// Returns the pool after the deposit, or `pool` unchanged when the
    /// deposit is rejected.
    #[must_use]
    fn try_add_liquidity(&self, pool: &PoolState, request: &LiquidityRequest) -> PoolState {
        self.evaluate(pool, request).pool_or(*pool)
    }

    /// Returns the maximum accepted deviation between the two ratios.
    #[must_use]
    fn ratio_tolerance(&self) -> f64;
}
