//! Constant-product simulation engine (`x · y = k`).
//!
//! The engine holds no pool state. Every operation takes a [`PoolState`]
//! snapshot and returns new values, so the same engine can serve any
//! number of sessions.
//!
//! # Swap Algorithm (input reserve `x`, output reserve `y`)
//!
//! 1. `fee = amount_in × fee_bps / 10 000`
//! 2. `y' = y · x / (x + amount_in)`
//! 3. `amount_out = y − y'`
//! 4. `x' = x + amount_in + fee` (fee stays in the pool)
//!
//! The fee is not part of the invariant denominator, so quoting the same
//! input as the curve sampler yields the same output.

use tracing::trace;

use crate::config::{CurveConfig, SimConfig};
use crate::domain::{
    Amount, CurveSample, Direction, FeeTier, LiquidityDecision, LiquidityRequest, ParsedAmount,
    PoolState, RejectReason, TradeQuote, TradeRequest,
};
use crate::error::SimError;
use crate::math::{amount_out, net_of_fee, output_reserve_after, payout};
use crate::traits::{CurveSampler, FromConfig, LiquidityValidator, SwapQuoter};

/// Stateless constant-product engine.
///
/// Created from a [`SimConfig`] via [`FromConfig`], or with the reference
/// parameters via [`Default`]: a 30 bp fee, a deposit ratio tolerance of
/// `0.01`, and a 101-point curve from `0` to `1000`.
///
/// # Example
///
/// ```rust
/// use hydra_sim::domain::{Direction, PoolState, TradeRequest};
/// use hydra_sim::engine::ConstantProductEngine;
/// use hydra_sim::traits::SwapQuoter;
///
/// let engine = ConstantProductEngine::default();
/// let pool = PoolState::new(500.0, 1000.0).expect("valid pool");
///
/// let request = TradeRequest::new(Direction::BToA, "100");
/// let quote = engine.quote(&pool, &request).expect("valid input");
/// assert!((quote.amount_out().get() - 45.454_545).abs() < 1e-6);
/// assert!((quote.total_input_with_fee().get() - 100.3).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantProductEngine {
    fee_tier: FeeTier,
    ratio_tolerance: f64,
    curve: CurveConfig,
}

impl ConstantProductEngine {
    /// Creates an engine from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] if `ratio_tolerance` is
    /// not finite and positive, or if `curve` is invalid.
    pub fn new(
        fee_tier: FeeTier,
        ratio_tolerance: f64,
        curve: CurveConfig,
    ) -> crate::error::Result<Self> {
        if !ratio_tolerance.is_finite() || ratio_tolerance <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "ratio_tolerance must be finite and positive",
            ));
        }
        curve.validate()?;
        Ok(Self {
            fee_tier,
            ratio_tolerance,
            curve,
        })
    }

    /// Returns the curve configuration.
    #[must_use]
    pub const fn curve(&self) -> CurveConfig {
        self.curve
    }

    fn compute_quote(
        &self,
        pool: &PoolState,
        direction: Direction,
        amount_in: Amount,
    ) -> crate::error::Result<TradeQuote> {
        let input_side = direction.input_side();
        let reserve_in = pool.reserve(input_side);
        let reserve_out = pool.reserve(direction.output_side());

        let breakdown = self
            .fee_tier
            .apply_fee(amount_in)
            .ok_or(SimError::NonFinite("fee-inclusive input overflow"))?;

        let remaining = output_reserve_after(reserve_in.get(), reserve_out.get(), amount_in.get())?;
        let amount_out = Amount::new(payout(reserve_out.get(), remaining)?)?;
        let new_reserve_in = reserve_in
            .checked_add(&breakdown.total_with_fee())
            .ok_or(SimError::NonFinite("input reserve overflow"))?;
        // A drained output side is rejected here as a non-positive reserve.
        let resulting = PoolState::from_sides(input_side, new_reserve_in, Amount::new(remaining)?)?;

        Ok(TradeQuote::new(
            direction,
            amount_in,
            amount_out,
            breakdown.fee(),
            breakdown.total_with_fee(),
            pool.spot_price(input_side).ok(),
            resulting,
        ))
    }

    fn sample_at(&self, pool: &PoolState, direction: Direction, input: f64) -> Option<f64> {
        let traded = if self.curve.fee_applied_in_curve() {
            net_of_fee(input, self.fee_tier.rate()).ok()?
        } else {
            input
        };
        amount_out(
            pool.reserve(direction.input_side()).get(),
            pool.reserve(direction.output_side()).get(),
            traded,
        )
        .ok()
    }
}

impl Default for ConstantProductEngine {
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::TIER_0_30_PERCENT,
            ratio_tolerance: SimConfig::DEFAULT_RATIO_TOLERANCE,
            curve: CurveConfig::default(),
        }
    }
}

impl FromConfig<SimConfig> for ConstantProductEngine {
    /// Creates an engine from the fee, tolerance and curve of `config`.
    ///
    /// # Errors
    ///
    /// Propagates any [`SimConfig::validate`] failure.
    fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Self::new(config.fee_tier()?, config.ratio_tolerance(), config.curve())
    }
}

impl SwapQuoter for ConstantProductEngine {
    fn quote(&self, pool: &PoolState, request: &TradeRequest) -> Option<TradeQuote> {
        let ParsedAmount::Valid(amount_in) = request.input_amount().parse() else {
            trace!(raw = %request.input_amount(), "trade input is not a positive number");
            return None;
        };
        match self.compute_quote(pool, request.direction(), amount_in) {
            Ok(quote) => Some(quote),
            Err(err) => {
                trace!(%pool, amount_in = amount_in.get(), error = %err, "quote discarded");
                None
            }
        }
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl LiquidityValidator for ConstantProductEngine {
    fn evaluate(&self, pool: &PoolState, request: &LiquidityRequest) -> LiquidityDecision {
        let Some((amount_a, amount_b)) = request.parse() else {
            trace!(
                raw_a = %request.amount_a(),
                raw_b = %request.amount_b(),
                "deposit amounts are not positive numbers"
            );
            return LiquidityDecision::Rejected {
                reason: RejectReason::InvalidAmounts,
            };
        };

        let expected = pool.reserve_b().get() / pool.reserve_a().get();
        let proposed = amount_b.get() / amount_a.get();
        // NaN from an overflowed ratio compares false and is rejected.
        let within_tolerance = (proposed - expected).abs() < self.ratio_tolerance;
        if !within_tolerance {
            trace!(expected, proposed, "deposit ratio outside tolerance");
            return LiquidityDecision::Rejected {
                reason: RejectReason::RatioMismatch { expected, proposed },
            };
        }

        let pool_after = pool
            .reserve_a()
            .checked_add(&amount_a)
            .zip(pool.reserve_b().checked_add(&amount_b))
            .and_then(|(a, b)| PoolState::from_amounts(a, b).ok());
        match pool_after {
            Some(pool) => LiquidityDecision::Accepted { pool },
            None => {
                trace!(%pool, "deposit would overflow reserves");
                LiquidityDecision::Rejected {
                    reason: RejectReason::NonFiniteResult,
                }
            }
        }
    }

    fn ratio_tolerance(&self) -> f64 {
        self.ratio_tolerance
    }
}

impl CurveSampler for ConstantProductEngine {
    /// Samples `intervals + 1` evenly spaced inputs from `0` to
    /// `range_max`. A sample whose arithmetic is not representable is
    /// omitted, which only happens for reserves near `f64::MAX`.
    fn sample_curve(&self, pool: &PoolState, direction: Direction) -> Vec<CurveSample> {
        let intervals = self.curve.intervals();
        let range_max = self.curve.range_max();
        let mut samples = Vec::with_capacity(self.curve.points());
        for i in 0..=intervals {
            let input = f64::from(i) / f64::from(intervals) * range_max;
            match self.sample_at(pool, direction, input) {
                Some(output) => samples.push(CurveSample::new(input, output)),
                None => trace!(input, "curve sample not representable"),
            }
        }
        samples
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BasisPoints;

    const EPS: f64 = 1e-9;

    fn reference_pool() -> PoolState {
        let Ok(pool) = PoolState::new(500.0, 1000.0) else {
            panic!("valid pool");
        };
        pool
    }

    fn engine_with_fee(bps: u32) -> ConstantProductEngine {
        let Ok(fee) = FeeTier::new(BasisPoints::new(bps)) else {
            panic!("valid fee");
        };
        let Ok(engine) = ConstantProductEngine::new(fee, 0.01, CurveConfig::default()) else {
            panic!("valid engine");
        };
        engine
    }

    #[test]
    fn default_uses_reference_parameters() {
        let engine = ConstantProductEngine::default();
        assert_eq!(engine.fee_tier(), FeeTier::TIER_0_30_PERCENT);
        assert_eq!(engine.ratio_tolerance(), 0.01);
        assert_eq!(engine.curve(), CurveConfig::default());
    }

    #[test]
    fn from_config_matches_default() {
        let Ok(engine) = ConstantProductEngine::from_config(&SimConfig::default()) else {
            panic!("valid config");
        };
        assert_eq!(engine, ConstantProductEngine::default());
    }

    #[test]
    fn from_config_rejects_invalid() {
        let cfg = SimConfig::default().with_fee_bps(BasisPoints::new(20_000));
        assert!(matches!(
            ConstantProductEngine::from_config(&cfg),
            Err(SimError::InvalidFee(_))
        ));
    }

    #[test]
    fn new_rejects_bad_tolerance() {
        let result =
            ConstantProductEngine::new(FeeTier::default(), f64::NAN, CurveConfig::default());
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }

    // -- Quoting -----------------------------------------------------------

    #[test]
    fn quote_b_to_a_reference_scenario() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let request = TradeRequest::new(Direction::BToA, "100");
        let Some(q) = engine.quote(&pool, &request) else {
            panic!("valid quote");
        };
        assert!((q.fee().get() - 0.3).abs() < EPS);
        assert!((q.total_input_with_fee().get() - 100.3).abs() < EPS);
        assert!((q.amount_out().get() - 45.454_545_454_545).abs() < 1e-9);
        let resulting = q.resulting_pool();
        assert!((resulting.reserve_a().get() - 454.545_454_545_454).abs() < 1e-9);
        assert!((resulting.reserve_b().get() - 1100.3).abs() < EPS);
        assert_eq!(q.direction(), Direction::BToA);
    }

    #[test]
    fn quote_a_to_b_is_symmetric() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::AToB, 50.0)) else {
            panic!("valid quote");
        };
        let remaining = 1000.0 * 500.0 / 550.0;
        assert!((q.amount_out().get() - (1000.0 - remaining)).abs() < 1e-9);
        assert!((q.resulting_pool().reserve_a().get() - 550.15).abs() < EPS);
        assert!((q.resulting_pool().reserve_b().get() - remaining).abs() < 1e-9);
    }

    #[test]
    fn quote_does_not_mutate_pool() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let _ = engine.quote(&pool, &TradeRequest::new(Direction::BToA, "100"));
        assert_eq!(pool, reference_pool());
    }

    #[test]
    fn invalid_inputs_yield_no_quote() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        for raw in ["", "  ", "abc", "-5", "0", "NaN", "inf"] {
            let request = TradeRequest::new(Direction::BToA, raw);
            assert!(engine.quote(&pool, &request).is_none(), "{raw:?}");
        }
        let request = TradeRequest::new(Direction::AToB, f64::INFINITY);
        assert!(engine.quote(&pool, &request).is_none());
    }

    #[test]
    fn quote_invariant_strictly_grows() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let Some(k_before) = pool.invariant() else {
            panic!("finite k");
        };
        for raw in ["0.01", "1", "250", "1e6"] {
            for dir in [Direction::AToB, Direction::BToA] {
                let Some(q) = engine.quote(&pool, &TradeRequest::new(dir, raw)) else {
                    panic!("valid quote for {raw}");
                };
                let Some(k_after) = q.resulting_pool().invariant() else {
                    panic!("finite k");
                };
                assert!(k_after.get() > k_before.get(), "{raw} {dir}");
            }
        }
    }

    #[test]
    fn output_strictly_increases_with_input() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let outputs: Vec<f64> = ["0.01", "0.02", "1", "100", "100.01", "1e4", "1e9"]
            .into_iter()
            .map(|raw| {
                let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::BToA, raw)) else {
                    panic!("valid quote for {raw}");
                };
                q.amount_out().get()
            })
            .collect();
        assert!(outputs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_fee_preserves_invariant() {
        let engine = engine_with_fee(0);
        let pool = reference_pool();
        let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::BToA, "100")) else {
            panic!("valid quote");
        };
        assert!(q.fee().is_zero());
        let Some(k) = q.resulting_pool().invariant() else {
            panic!("finite k");
        };
        assert!((k.get() - 500_000.0).abs() < 1e-6);
    }

    #[test]
    fn huge_input_is_bounded_or_absent() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        if let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::BToA, 1e12)) {
            assert!(q.amount_out().get() < pool.reserve_a().get());
        }
        // amount + fee overflows at f64::MAX.
        let request = TradeRequest::new(Direction::BToA, f64::MAX);
        assert!(engine.quote(&pool, &request).is_none());
    }

    #[test]
    fn near_max_input_still_quotes() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::BToA, 1e308)) else {
            panic!("finite quote");
        };
        assert!((q.fee().get() - 3e305).abs() < 1e292);
        assert!((q.total_input_with_fee().get() - 1.003e308).abs() < 1e295);
        let resulting = q.resulting_pool();
        assert!(resulting.reserve_a().get() > 0.0 && resulting.reserve_a().get() < 1e-300);
        assert!(q.amount_out().get() < pool.reserve_a().get());
    }

    #[test]
    fn spot_price_before_is_input_asset_price() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::BToA, "100")) else {
            panic!("valid quote");
        };
        // 1 HKD is worth 0.5 PST before the trade.
        let Some(impact) = q.price_impact_percent() else {
            panic!("impact available");
        };
        assert!((impact - (0.5 - 0.454_545_454_545) / 0.5 * 100.0).abs() < 1e-6);
    }

    // -- Liquidity ---------------------------------------------------------

    #[test]
    fn deposit_within_tolerance_is_accepted() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let request = LiquidityRequest::new("50", "100.4");
        let decision = engine.evaluate(&pool, &request);
        let LiquidityDecision::Accepted { pool: after } = decision else {
            panic!("accepted");
        };
        assert!((after.reserve_a().get() - 550.0).abs() < EPS);
        assert!((after.reserve_b().get() - 1100.4).abs() < EPS);
        assert_eq!(engine.try_add_liquidity(&pool, &request), after);
    }

    #[test]
    fn deposit_outside_tolerance_is_rejected() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let request = LiquidityRequest::new(50.0, 102.0);
        let Some(RejectReason::RatioMismatch { expected, proposed }) =
            engine.evaluate(&pool, &request).reject_reason()
        else {
            panic!("ratio mismatch");
        };
        assert!((expected - 2.0).abs() < EPS);
        assert!((proposed - 2.04).abs() < EPS);
        assert_eq!(engine.try_add_liquidity(&pool, &request), pool);
    }

    #[test]
    fn deposit_with_invalid_side_is_rejected() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        for request in [
            LiquidityRequest::new("", "100"),
            LiquidityRequest::new("50", "abc"),
            LiquidityRequest::new(-50.0, -100.0),
            LiquidityRequest::new(0.0, 0.0),
        ] {
            assert_eq!(
                engine.evaluate(&pool, &request).reject_reason(),
                Some(RejectReason::InvalidAmounts)
            );
            assert_eq!(engine.try_add_liquidity(&pool, &request), pool);
        }
    }

    #[test]
    fn overflowing_deposit_is_rejected() {
        let engine = ConstantProductEngine::default();
        let Ok(pool) = PoolState::new(f64::MAX, f64::MAX) else {
            panic!("valid pool");
        };
        let request = LiquidityRequest::new(f64::MAX, f64::MAX);
        assert_eq!(
            engine.evaluate(&pool, &request).reject_reason(),
            Some(RejectReason::NonFiniteResult)
        );
    }

    // -- Curve -------------------------------------------------------------

    #[test]
    fn default_curve_has_101_points() {
        let engine = ConstantProductEngine::default();
        let curve = engine.sample_curve(&reference_pool(), Direction::BToA);
        assert_eq!(curve.len(), 101);
        assert_eq!(curve[0].input, 0.0);
        assert_eq!(curve[0].output, 0.0);
        assert_eq!(curve[100].input, 1000.0);
        assert!(curve.windows(2).all(|w| w[1].output >= w[0].output));
    }

    #[test]
    fn curve_matches_quote_without_fee_flag() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        let curve = engine.sample_curve(&pool, Direction::BToA);
        let Some(q) = engine.quote(&pool, &TradeRequest::new(Direction::BToA, "100")) else {
            panic!("valid quote");
        };
        assert!((curve[10].output - q.amount_out().get()).abs() < EPS);
    }

    #[test]
    fn curve_with_fee_flag_uses_net_input() {
        let Ok(curve_cfg) = CurveConfig::new(1000.0, 100, true) else {
            panic!("valid curve");
        };
        let Ok(engine) = ConstantProductEngine::new(FeeTier::default(), 0.01, curve_cfg) else {
            panic!("valid engine");
        };
        let pool = reference_pool();
        let curve = engine.sample_curve(&pool, Direction::BToA);
        let net = 100.0 / 1.003;
        let expected = 500.0 - 500.0 * 1000.0 / (1000.0 + net);
        assert!((curve[10].output - expected).abs() < 1e-9);
        let plain = ConstantProductEngine::default().sample_curve(&pool, Direction::BToA);
        assert!(curve[10].output < plain[10].output);
    }

    #[test]
    fn curve_is_deterministic() {
        let engine = ConstantProductEngine::default();
        let pool = reference_pool();
        assert_eq!(
            engine.sample_curve(&pool, Direction::AToB),
            engine.sample_curve(&pool, Direction::AToB)
        );
    }
}
