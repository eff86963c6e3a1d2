//! Constant-product pricing formulas (`x · y = k`).
//!
//! These are the raw invariant computations shared by the swap quoter and
//! the curve sampler. They know nothing about fees: callers decide which
//! amount enters the invariant.
//!
//! # Swap (input reserve `x`, output reserve `y`, input `Δx`)
//!
//! ```text
//! y' = x · y / (x + Δx)
//! Δy = y − y'
//! ```
//!
//! The division is evaluated as `y · (x / (x + Δx))`, which is the same
//! quantity but cannot overflow when `x · y` exceeds `f64::MAX`.

use super::float::{checked_add, checked_div, checked_mul, checked_sub};
use crate::error::SimError;

/// Output-side reserve left after selling `amount_in` with `k` held fixed.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if any intermediate overflows.
pub fn output_reserve_after(
    reserve_in: f64,
    reserve_out: f64,
    amount_in: f64,
) -> Result<f64, SimError> {
    let denominator = checked_add(reserve_in, amount_in)?;
    let ratio = checked_div(reserve_in, denominator)?;
    checked_mul(reserve_out, ratio)
}

/// Amount paid out when the output side drops from `reserve_out` to
/// `remaining`.
///
/// The result is clamped at zero so rounding on a vanishing input never
/// yields a negative output.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if the difference overflows.
pub fn payout(reserve_out: f64, remaining: f64) -> Result<f64, SimError> {
    Ok(checked_sub(reserve_out, remaining)?.max(0.0))
}

/// Amount paid out for selling `amount_in`: `y − x·y / (x + Δx)`.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if any intermediate overflows.
pub fn amount_out(reserve_in: f64, reserve_out: f64, amount_in: f64) -> Result<f64, SimError> {
    let remaining = output_reserve_after(reserve_in, reserve_out, amount_in)?;
    payout(reserve_out, remaining)
}

/// Portion of a fee-inclusive budget that is actually traded:
/// `budget / (1 + fee_rate)`.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if `fee_rate` makes the divisor zero
/// or the quotient overflows.
pub fn net_of_fee(budget: f64, fee_rate: f64) -> Result<f64, SimError> {
    checked_div(budget, 1.0 + fee_rate)
}
