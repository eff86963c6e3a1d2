//! Arithmetic utilities for pool calculations.
//!
//! - [`float`]: checked `f64` operations that reject NaN and infinities.
//! - [`constant_product`]: the raw `x · y = k` formulas, fee-agnostic.

pub mod constant_product;
pub mod float;

pub use constant_product::{amount_out, net_of_fee, output_reserve_after, payout};
