//! Property-based tests using `proptest` for engine invariants.
//!
//! 1. **Invariant growth**: `k` strictly grows across a quote.
//! 2. **Monotonicity**: a larger input always receives a larger output.
//! 3. **Bounded output**: the output never reaches the opposing reserve.
//! 4. **Round trip**: A→B→A never returns more than was paid, and
//!    breaks even at most when the fee is zero.
//! 5. **Curve shape**: fixed length, origin at zero, non-decreasing.
//! 6. **Deposit ratio**: proportional deposits are accepted, skewed ones
//!    leave the pool unchanged.
//! 7. **Absent input**: non-positive inputs never produce a quote.

use proptest::prelude::*;

use super::ConstantProductEngine;
use crate::config::CurveConfig;
use crate::domain::{BasisPoints, Direction, FeeTier, LiquidityRequest, PoolState, TradeRequest};
use crate::traits::{CurveSampler, LiquidityValidator, SwapQuoter};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(ra: f64, rb: f64) -> PoolState {
    let Ok(pool) = PoolState::new(ra, rb) else {
        panic!("valid pool");
    };
    pool
}

fn quote_out(engine: &ConstantProductEngine, pool: &PoolState, dir: Direction, x: f64) -> f64 {
    let Some(q) = engine.quote(pool, &TradeRequest::new(dir, x)) else {
        panic!("valid quote for {x}");
    };
    q.amount_out().get()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in `[1, 10_000_000]`.
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (1u32..=10_000_000u32).prop_map(f64::from)
}

/// Trade inputs in `[0.01, 10_000]`.
fn input_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000_000u32).prop_map(|v| f64::from(v) / 100.0)
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::AToB), Just(Direction::BToA)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_invariant_strictly_grows(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in input_strategy(),
        dir in direction_strategy(),
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let Some(q) = engine.quote(&pool, &TradeRequest::new(dir, x)) else {
            return Ok(());
        };
        let k_before = ra * rb;
        let after = q.resulting_pool();
        let k_after = after.reserve_a().get() * after.reserve_b().get();
        prop_assert!(
            k_after > k_before,
            "k did not grow: before={} after={}", k_before, k_after
        );
    }

    #[test]
    fn prop_output_strictly_increasing_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x1 in input_strategy(),
        x2 in input_strategy(),
        dir in direction_strategy(),
    ) {
        if x1 == x2 {
            return Ok(());
        }
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let (small, large) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let out_small = quote_out(&engine, &pool, dir, small);
        let out_large = quote_out(&engine, &pool, dir, large);
        prop_assert!(
            out_small < out_large,
            "output not increasing: {}→{} vs {}→{}", small, out_small, large, out_large
        );
    }

    #[test]
    fn prop_output_bounded_by_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in input_strategy(),
        dir in direction_strategy(),
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let Some(q) = engine.quote(&pool, &TradeRequest::new(dir, x)) else {
            return Ok(());
        };
        let reserve_out = pool.reserve(dir.output_side()).get();
        prop_assert!(q.amount_out().get() >= 0.0);
        prop_assert!(q.amount_out().get() < reserve_out);
    }

    #[test]
    fn prop_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in input_strategy(),
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let Some(first) = engine.quote(&pool, &TradeRequest::new(Direction::AToB, x)) else {
            return Ok(());
        };
        let back = TradeRequest::new(Direction::BToA, first.amount_out().get());
        let Some(second) = engine.quote(&first.resulting_pool(), &back) else {
            return Ok(());
        };
        // The first leg's fee stays in the pool, so the reverse leg may
        // return slightly more than `x`, but never more than was paid.
        let paid = first.total_input_with_fee().get();
        prop_assert!(
            second.amount_out().get() <= paid + 1e-9 * (ra + paid),
            "round trip gained: paid={} got back={}", paid, second.amount_out().get()
        );
    }

    #[test]
    fn prop_fee_free_round_trip_breaks_even(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in input_strategy(),
    ) {
        let Ok(fee) = FeeTier::new(BasisPoints::ZERO) else {
            panic!("valid fee");
        };
        let Ok(engine) = ConstantProductEngine::new(fee, 0.01, CurveConfig::default()) else {
            panic!("valid engine");
        };
        let pool = make_pool(ra, rb);
        let Some(first) = engine.quote(&pool, &TradeRequest::new(Direction::AToB, x)) else {
            return Ok(());
        };
        let back = TradeRequest::new(Direction::BToA, first.amount_out().get());
        let Some(second) = engine.quote(&first.resulting_pool(), &back) else {
            return Ok(());
        };
        // Cancellation error scales with the reserve, not the input.
        prop_assert!(second.amount_out().get() <= x + 1e-9 * (ra + x));
    }

    #[test]
    fn prop_curve_shape(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        dir in direction_strategy(),
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let curve = engine.sample_curve(&pool, dir);
        prop_assert_eq!(curve.len(), 101);
        prop_assert_eq!(curve[0].output, 0.0);
        prop_assert_eq!(curve[100].input, 1000.0);
        let reserve_out = pool.reserve(dir.output_side()).get();
        for pair in curve.windows(2) {
            prop_assert!(pair[0].input < pair[1].input);
            prop_assert!(pair[0].output <= pair[1].output);
            prop_assert!(pair[1].output < reserve_out);
        }
    }

    #[test]
    fn prop_proportional_deposit_accepted(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in input_strategy(),
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let b = a * rb / ra;
        let after = engine.try_add_liquidity(&pool, &LiquidityRequest::new(a, b));
        prop_assert!((after.reserve_a().get() - (ra + a)).abs() <= 1e-9 * (ra + a));
        prop_assert!((after.reserve_b().get() - (rb + b)).abs() <= 1e-9 * (rb + b));
    }

    #[test]
    fn prop_skewed_deposit_rejected(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in input_strategy(),
        skew in 0.02f64..10.0,
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        let b = a * (rb / ra + skew);
        let decision = engine.evaluate(&pool, &LiquidityRequest::new(a, b));
        prop_assert!(!decision.is_accepted());
        prop_assert_eq!(engine.try_add_liquidity(&pool, &LiquidityRequest::new(a, b)), pool);
    }

    #[test]
    fn prop_non_positive_input_absent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in -1.0e9f64..=0.0,
        dir in direction_strategy(),
    ) {
        let engine = ConstantProductEngine::default();
        let pool = make_pool(ra, rb);
        prop_assert!(engine.quote(&pool, &TradeRequest::new(dir, x)).is_none());
    }
}
