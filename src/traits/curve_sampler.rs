//! Slippage-curve sampling.

use crate::domain::{CurveSample, Direction, PoolState};

/// Samples the output a trader would receive across a range of inputs.
///
/// Sampling is pure and deterministic: the same pool and direction always
/// produce the same samples, in ascending input order, with the first
/// sample at input `0`.
pub trait CurveSampler {
    /// Returns the `(input, output)` samples for `direction` on `pool`.
    #[must_use]
    fn sample_curve(&self, pool: &PoolState, direction: Direction) -> Vec<CurveSample>;
}
