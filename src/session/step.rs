//! The compound trade-then-deposit simulation step.

use crate::domain::{LiquidityDecision, LiquidityRequest, PoolState, TradeQuote, TradeRequest};
use crate::traits::{LiquidityValidator, SwapQuoter};

/// Result of one [`simulate`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationStep {
    /// The quote, if a trade was supplied and its input was valid.
    pub trade_quote: Option<TradeQuote>,
    /// The deposit decision, if a deposit was supplied.
    pub liquidity: Option<LiquidityDecision>,
    /// Pool after the trade and then the deposit.
    pub simulated_pool: PoolState,
}

/// Applies an optional trade and then an optional deposit to `current`.
///
/// The deposit is always evaluated against the post-trade pool. An absent
/// quote or a rejected deposit leaves the working pool as it was, so the
/// result is never partially applied.
///
/// # Example
///
/// ```
/// use hydra_sim::domain::{Direction, LiquidityRequest, PoolState, TradeRequest};
/// use hydra_sim::engine::ConstantProductEngine;
/// use hydra_sim::session::simulate;
///
/// let engine = ConstantProductEngine::default();
/// let pool = PoolState::new(500.0, 1000.0).expect("valid pool");
/// let trade = TradeRequest::new(Direction::BToA, "abc");
/// let deposit = LiquidityRequest::new("50", "100");
///
/// let step = simulate(&engine, &pool, Some(&trade), Some(&deposit));
/// assert!(step.trade_quote.is_none());
/// assert_eq!(step.simulated_pool.reserve_a().get(), 550.0);
/// ```
#[must_use]
pub fn simulate<E>(
    engine: &E,
    current: &PoolState,
    trade: Option<&TradeRequest>,
    deposit: Option<&LiquidityRequest>,
) -> SimulationStep
where
    E: SwapQuoter + LiquidityValidator,
{
    let trade_quote = trade.and_then(|request| engine.quote(current, request));
    let after_trade = trade_quote.map_or(*current, |q| q.resulting_pool());
    let liquidity = deposit.map(|request| engine.evaluate(&after_trade, request));
    let simulated_pool = liquidity.map_or(after_trade, |d| d.pool_or(after_trade));
    SimulationStep {
        trade_quote,
        liquidity,
        simulated_pool,
    }
}
