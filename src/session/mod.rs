//! Caller-owned simulation session.
//!
//! A [`Session`] holds the committed pool together with the pending trade
//! and deposit a user is editing. Each edit is followed by
//! [`Session::recompute`], which derives a fresh [`DerivedView`] without
//! touching the committed pool; [`Session::commit`] adopts the simulated
//! pool and clears the pending amounts.
//!
//! ```
//! use hydra_sim::config::SimConfig;
//! use hydra_sim::session::Session;
//!
//! let mut session = Session::new(&SimConfig::default()).expect("valid config");
//! assert_eq!(session.trade_label(), "HKD to PST");
//!
//! session.set_trade_amount("100");
//! let view = session.recompute();
//! assert!(view.trade_quote().is_some());
//!
//! let pool = session.commit();
//! assert!((pool.reserve_b().get() - 1100.3).abs() < 1e-9);
//! assert!(session.pending_trade().input_amount().is_blank());
//! ```

mod step;
mod view;

pub use step::{simulate, SimulationStep};
pub use view::DerivedView;

use tracing::debug;

use crate::config::SimConfig;
use crate::domain::{
    AssetPair, Direction, LiquidityRequest, ParsedAmount, PoolState, RawAmount, Side, TradeRequest,
};
use crate::engine::ConstantProductEngine;
use crate::error::SimError;
use crate::traits::FromConfig;

/// Interactive state for one simulated pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    engine: ConstantProductEngine,
    pair: AssetPair,
    current: PoolState,
    lp_supply: f64,
    trade: TradeRequest,
    liquidity: LiquidityRequest,
}

impl Session {
    /// Creates a session from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates any [`SimConfig::validate`] failure.
    pub fn new(config: &SimConfig) -> crate::error::Result<Self> {
        let engine = ConstantProductEngine::from_config(config)?;
        let pool = config.initial_pool()?;
        Ok(Self::from_pool(engine, config.pair().clone(), pool))
    }

    /// Creates a session around an existing pool.
    ///
    /// The LP supply is seeded as `√(reserve_a × reserve_b)` and is not
    /// recomputed afterwards.
    #[must_use]
    pub fn from_pool(engine: ConstantProductEngine, pair: AssetPair, pool: PoolState) -> Self {
        Self {
            engine,
            pair,
            current: pool,
            lp_supply: pool.genesis_lp_supply(),
            trade: TradeRequest::default(),
            liquidity: LiquidityRequest::default(),
        }
    }

    /// Returns the engine used for recomputation.
    #[must_use]
    pub const fn engine(&self) -> &ConstantProductEngine {
        &self.engine
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the committed pool.
    #[must_use]
    pub const fn current_pool(&self) -> PoolState {
        self.current
    }

    /// Returns the LP supply seeded at creation.
    #[must_use]
    pub const fn lp_supply(&self) -> f64 {
        self.lp_supply
    }

    /// Returns the pending trade.
    #[must_use]
    pub const fn pending_trade(&self) -> &TradeRequest {
        &self.trade
    }

    /// Returns the pending deposit.
    #[must_use]
    pub const fn pending_liquidity(&self) -> &LiquidityRequest {
        &self.liquidity
    }

    /// Human-readable label of the pending direction, e.g. `"HKD to PST"`.
    #[must_use]
    pub fn trade_label(&self) -> String {
        self.pair.label(self.trade.direction())
    }

    /// Sets the pending direction.
    pub fn set_trade_direction(&mut self, direction: Direction) {
        self.trade.set_direction(direction);
    }

    /// Sets the pending direction from a label such as `"PST to HKD"`.
    ///
    /// Returns `false` and keeps the direction if the label names neither
    /// direction of this pair.
    pub fn select_trade_label(&mut self, label: &str) -> bool {
        match self.pair.parse_direction(label) {
            Some(direction) => {
                self.trade.set_direction(direction);
                true
            }
            None => false,
        }
    }

    /// Sets the pending trade amount. Any raw value is accepted here;
    /// validity is decided at recomputation.
    pub fn set_trade_amount(&mut self, raw: impl Into<RawAmount>) {
        self.trade.set_input_amount(raw);
    }

    /// Sets both sides of the pending deposit.
    pub fn set_liquidity(&mut self, raw_a: impl Into<RawAmount>, raw_b: impl Into<RawAmount>) {
        self.liquidity = LiquidityRequest::new(raw_a, raw_b);
    }

    /// Clears the pending amounts; the direction is kept.
    pub fn clear_pending(&mut self) {
        self.trade.clear_amount();
        self.liquidity = LiquidityRequest::default();
    }

    /// Replaces one reserve of the committed pool.
    ///
    /// Returns `false` and leaves the pool unchanged unless `raw` parses
    /// to a finite positive number.
    pub fn set_reserve(&mut self, side: Side, raw: impl Into<RawAmount>) -> bool {
        let raw = raw.into();
        let ParsedAmount::Valid(reserve) = raw.parse() else {
            debug!(?side, %raw, "ignoring invalid reserve edit");
            return false;
        };
        match self.current.with_reserve(side, reserve) {
            Ok(pool) => {
                self.current = pool;
                true
            }
            Err(err) => {
                debug!(?side, error = %err, "ignoring invalid reserve edit");
                false
            }
        }
    }

    /// Derives the view for the pending inputs. Does not change the
    /// session.
    #[must_use]
    pub fn recompute(&self) -> DerivedView {
        let view = DerivedView::derive(&self.engine, &self.current, &self.trade, &self.liquidity);
        debug!(
            reserve_a = view.simulated_pool().reserve_a().get(),
            reserve_b = view.simulated_pool().reserve_b().get(),
            quoted = view.trade_quote().is_some(),
            deposit_accepted = view.liquidity().is_some_and(|d| d.is_accepted()),
            "recomputed"
        );
        view
    }

    /// Adopts the simulated pool, clears the pending amounts, and returns
    /// the new committed pool.
    pub fn commit(&mut self) -> PoolState {
        let view = self.recompute();
        self.current = view.simulated_pool();
        self.clear_pending();
        debug!(
            reserve_a = self.current.reserve_a().get(),
            reserve_b = self.current.reserve_b().get(),
            "committed"
        );
        self.current
    }
}

impl FromConfig<SimConfig> for Session {
    fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        Self::new(config)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn session() -> Session {
        let Ok(s) = Session::new(&SimConfig::default()) else {
            panic!("valid config");
        };
        s
    }

    #[test]
    fn starts_from_reference_pool() {
        let s = session();
        assert_eq!(s.current_pool().reserve_a().get(), 500.0);
        assert_eq!(s.current_pool().reserve_b().get(), 1000.0);
        assert!((s.lp_supply() - 500_000f64.sqrt()).abs() < 1e-9);
        assert_eq!(s.pending_trade().direction(), Direction::BToA);
        assert_eq!(s.trade_label(), "HKD to PST");
        assert!(s.pending_liquidity().is_blank());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SimConfig::default().with_initial_reserves(-1.0, 1.0);
        assert!(matches!(
            Session::from_config(&cfg),
            Err(SimError::InvalidPool(_))
        ));
    }

    #[test]
    fn recompute_does_not_mutate() {
        let mut s = session();
        s.set_trade_amount("100");
        let before = s.clone();
        let _ = s.recompute();
        assert_eq!(s, before);
    }

    #[test]
    fn commit_applies_trade_and_keeps_direction() {
        let mut s = session();
        s.set_trade_direction(Direction::AToB);
        s.set_trade_amount(50.0);
        let pool = s.commit();
        assert!((pool.reserve_a().get() - 550.15).abs() < 1e-9);
        assert_eq!(s.current_pool(), pool);
        assert_eq!(s.pending_trade().direction(), Direction::AToB);
        assert!(s.pending_trade().input_amount().is_blank());
    }

    #[test]
    fn commit_with_invalid_input_is_noop() {
        let mut s = session();
        s.set_trade_amount("abc");
        s.set_liquidity("50", "150");
        let before = s.current_pool();
        assert_eq!(s.commit(), before);
    }

    #[test]
    fn lp_supply_is_not_recomputed() {
        let mut s = session();
        let supply = s.lp_supply();
        s.set_liquidity("50", "100");
        let _ = s.commit();
        assert_eq!(s.lp_supply(), supply);
        assert!((s.current_pool().reserve_a().get() - 550.0).abs() < 1e-9);
    }

    #[test]
    fn set_reserve_ignores_invalid() {
        let mut s = session();
        for raw in ["", "abc", "-1", "0", "inf"] {
            assert!(!s.set_reserve(Side::A, raw), "{raw:?}");
        }
        assert_eq!(s.current_pool().reserve_a().get(), 500.0);
        assert!(s.set_reserve(Side::B, "2000"));
        assert_eq!(s.current_pool().reserve_b().get(), 2000.0);
    }

    #[test]
    fn label_selection() {
        let mut s = session();
        assert!(s.select_trade_label("PST to HKD"));
        assert_eq!(s.pending_trade().direction(), Direction::AToB);
        assert!(!s.select_trade_label("BTC to HKD"));
        assert_eq!(s.pending_trade().direction(), Direction::AToB);
    }
}
