//! Free functions over the reference engine.
//!
//! Each function builds a [`ConstantProductEngine::default`] (30 bp fee,
//! `0.01` ratio tolerance, 101-point curve up to `1000`) and forwards to
//! the matching trait method. Use the engine directly for other
//! parameters.
//!
//! ```
//! use hydra_sim::api;
//! use hydra_sim::domain::Direction;
//!
//! let pool = api::create_pool(500.0, 1000.0).expect("valid pool");
//! let quote = api::quote(&pool, Direction::BToA, "100").expect("valid input");
//! let next = api::commit(&pool, &quote.resulting_pool());
//! assert!((next.reserve_b().get() - 1100.3).abs() < 1e-9);
//!
//! assert!(api::quote(&pool, Direction::BToA, "abc").is_none());
//! assert_eq!(api::try_add_liquidity(&pool, 50, 102), pool);
//! ```

use crate::domain::{
    CurveSample, Direction, LiquidityRequest, ParsedAmount, PoolState, RawAmount, TradeQuote,
    TradeRequest,
};
use crate::engine::ConstantProductEngine;
use crate::session::DerivedView;
use crate::traits::{CurveSampler, LiquidityValidator, SwapQuoter};

/// Creates a pool from two reserves.
///
/// # Errors
///
/// Returns [`SimError::InvalidPool`](crate::error::SimError::InvalidPool)
/// if either reserve is non-finite or not positive.
pub fn create_pool(reserve_a: f64, reserve_b: f64) -> crate::error::Result<PoolState> {
    PoolState::new(reserve_a, reserve_b)
}

/// Validates raw user input as a finite positive amount.
#[must_use]
pub fn parse_amount(raw: impl Into<RawAmount>) -> ParsedAmount {
    raw.into().parse()
}

/// Quotes selling `raw_input` in `direction`; `None` for invalid input.
#[must_use]
pub fn quote(
    pool: &PoolState,
    direction: Direction,
    raw_input: impl Into<RawAmount>,
) -> Option<TradeQuote> {
    ConstantProductEngine::default().quote(pool, &TradeRequest::new(direction, raw_input))
}

/// Adds a proportional deposit, or returns `pool` unchanged.
#[must_use]
pub fn try_add_liquidity(
    pool: &PoolState,
    raw_a: impl Into<RawAmount>,
    raw_b: impl Into<RawAmount>,
) -> PoolState {
    ConstantProductEngine::default().try_add_liquidity(pool, &LiquidityRequest::new(raw_a, raw_b))
}

/// Samples the reference 101-point slippage curve.
#[must_use]
pub fn sample_curve(pool: &PoolState, direction: Direction) -> Vec<CurveSample> {
    ConstantProductEngine::default().sample_curve(pool, direction)
}

/// Adopts a simulated pool. No re-validation is performed; `simulated`
/// already satisfies every pool invariant by construction.
#[must_use]
pub const fn commit(_current: &PoolState, simulated: &PoolState) -> PoolState {
    *simulated
}

/// Derives the full view for a pending trade and deposit.
#[must_use]
pub fn recompute(
    current: &PoolState,
    trade: &TradeRequest,
    deposit: &LiquidityRequest,
) -> DerivedView {
    DerivedView::derive(&ConstantProductEngine::default(), current, trade, deposit)
}
