//! Everything a presentation layer needs after one recomputation.

use serde::Serialize;

use super::step::simulate;
use crate::domain::{
    CurveSample, Direction, LiquidityDecision, LiquidityRequest, PoolState, Side, TradeQuote,
    TradeRequest,
};
use crate::traits::{CurveSampler, LiquidityValidator, SwapQuoter};

/// Derived values for the current inputs.
///
/// Recomputed from scratch on every input change; nothing here is cached
/// between calls. Serializes to a flat JSON object so a UI can render it
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    current_pool: PoolState,
    direction: Direction,
    trade_quote: Option<TradeQuote>,
    liquidity: Option<LiquidityDecision>,
    simulated_pool: PoolState,
    curve: Vec<CurveSample>,
}

impl DerivedView {
    /// Runs the compound step for `trade` and `deposit` and samples the
    /// curve of `current` in the trade's direction.
    ///
    /// A blank deposit is skipped rather than evaluated, so the view
    /// carries a decision only once the user has typed something.
    #[must_use]
    pub fn derive<E>(
        engine: &E,
        current: &PoolState,
        trade: &TradeRequest,
        deposit: &LiquidityRequest,
    ) -> Self
    where
        E: SwapQuoter + LiquidityValidator + CurveSampler,
    {
        let deposit = (!deposit.is_blank()).then_some(deposit);
        let step = simulate(engine, current, Some(trade), deposit);
        Self {
            current_pool: *current,
            direction: trade.direction(),
            trade_quote: step.trade_quote,
            liquidity: step.liquidity,
            simulated_pool: step.simulated_pool,
            curve: engine.sample_curve(current, trade.direction()),
        }
    }

    /// Pool before any pending change.
    #[must_use]
    pub const fn current_pool(&self) -> PoolState {
        self.current_pool
    }

    /// Direction of the pending trade and of the curve.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Quote for the pending trade, absent for invalid input.
    #[must_use]
    pub const fn trade_quote(&self) -> Option<TradeQuote> {
        self.trade_quote
    }

    /// Decision for the pending deposit, absent when it is blank.
    #[must_use]
    pub const fn liquidity(&self) -> Option<LiquidityDecision> {
        self.liquidity
    }

    /// Pool after the pending trade and deposit.
    #[must_use]
    pub const fn simulated_pool(&self) -> PoolState {
        self.simulated_pool
    }

    /// Slippage curve of the current pool.
    #[must_use]
    pub fn curve(&self) -> &[CurveSample] {
        &self.curve
    }

    /// Share of each side in the simulated pool, for a composition bar.
    #[must_use]
    pub fn simulated_composition(&self) -> (f64, f64) {
        (
            self.simulated_pool.composition(Side::A),
            self.simulated_pool.composition(Side::B),
        )
    }

    /// Returns `true` if committing would change the current pool.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.simulated_pool != self.current_pool
    }
}
