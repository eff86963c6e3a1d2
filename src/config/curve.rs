//! Configuration for slippage-curve sampling.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Largest accepted number of curve intervals.
const MAX_INTERVALS: u32 = 100_000;

/// Shape of the sampled input range and the fee treatment of the curve.
///
/// Samples are taken at `input = (i / intervals) × range_max` for
/// `i = 0..=intervals`, giving `intervals + 1` points.
///
/// # Fee treatment
///
/// With `fee_applied_in_curve == false` (the default) each output is the
/// raw invariant output for `input`, identical to the `amount_out` a quote
/// for the same input reports; the fee is not shown. With `true`, `input`
/// is read as a fee-inclusive budget and the invariant is evaluated at
/// `input / (1 + fee_rate)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurveConfig")]
pub struct CurveConfig {
    range_max: f64,
    intervals: u32,
    fee_applied_in_curve: bool,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCurveConfig {
    range_max: f64,
    intervals: u32,
    fee_applied_in_curve: bool,
}

impl Default for RawCurveConfig {
    fn default() -> Self {
        let CurveConfig {
            range_max,
            intervals,
            fee_applied_in_curve,
        } = CurveConfig::default();
        Self {
            range_max,
            intervals,
            fee_applied_in_curve,
        }
    }
}

impl TryFrom<RawCurveConfig> for CurveConfig {
    type Error = SimError;

    fn try_from(raw: RawCurveConfig) -> Result<Self, Self::Error> {
        Self::new(raw.range_max, raw.intervals, raw.fee_applied_in_curve)
    }
}

impl CurveConfig {
    /// Reference upper bound of the sampled input range.
    pub const DEFAULT_RANGE_MAX: f64 = 1_000.0;

    /// Reference number of intervals (101 points).
    pub const DEFAULT_INTERVALS: u32 = 100;

    /// Creates a validated curve configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] if `range_max` is not a
    /// finite positive number or `intervals` is outside `1..=100_000`.
    pub fn new(
        range_max: f64,
        intervals: u32,
        fee_applied_in_curve: bool,
    ) -> crate::error::Result<Self> {
        let config = Self {
            range_max,
            intervals,
            fee_applied_in_curve,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] on any violation.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.range_max.is_finite() || self.range_max <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "curve range_max must be finite and positive",
            ));
        }
        if self.intervals == 0 {
            return Err(SimError::InvalidConfiguration(
                "curve needs at least one interval",
            ));
        }
        if self.intervals > MAX_INTERVALS {
            return Err(SimError::InvalidConfiguration(
                "curve intervals exceed 100000",
            ));
        }
        Ok(())
    }

    /// Upper bound of the sampled input range.
    #[must_use]
    pub const fn range_max(&self) -> f64 {
        self.range_max
    }

    /// Number of equal intervals between `0` and `range_max`.
    #[must_use]
    pub const fn intervals(&self) -> u32 {
        self.intervals
    }

    /// Number of samples produced: `intervals + 1`.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.intervals as usize + 1
    }

    /// Whether sample inputs are treated as fee-inclusive budgets.
    #[must_use]
    pub const fn fee_applied_in_curve(&self) -> bool {
        self.fee_applied_in_curve
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            range_max: Self::DEFAULT_RANGE_MAX,
            intervals: Self::DEFAULT_INTERVALS,
            fee_applied_in_curve: false,
        }
    }
}
