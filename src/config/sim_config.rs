//! Top-level configuration of a simulation session.

use serde::{Deserialize, Serialize};

use super::CurveConfig;
use crate::domain::{AssetPair, BasisPoints, FeeTier, PoolState};
use crate::error::SimError;

/// Declarative blueprint for an engine and its session.
///
/// Every field has a reference default, so a partial document only needs
/// the values it changes:
///
/// ```
/// use hydra_sim::config::SimConfig;
///
/// let cfg: SimConfig = serde_json::from_str(r#"{ "fee_bps": 5 }"#).expect("valid json");
/// assert_eq!(cfg.fee_tier().expect("valid fee").basis_points().get(), 5);
/// assert_eq!(cfg.ratio_tolerance(), 0.01);
/// ```
///
/// # Derived Values
///
/// - Initial pool: `{ initial_reserve_a, initial_reserve_b }`
/// - Initial price of A in B: `initial_reserve_b / initial_reserve_a`
///
/// # Validation
///
/// - Both initial reserves must be finite and positive.
/// - `fee_bps` must not exceed 10 000.
/// - `ratio_tolerance` must be finite and positive.
/// - The curve configuration must be valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSimConfig")]
pub struct SimConfig {
    pair: AssetPair,
    initial_reserve_a: f64,
    initial_reserve_b: f64,
    fee_bps: BasisPoints,
    ratio_tolerance: f64,
    curve: CurveConfig,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSimConfig {
    pair: AssetPair,
    initial_reserve_a: f64,
    initial_reserve_b: f64,
    fee_bps: BasisPoints,
    ratio_tolerance: f64,
    curve: CurveConfig,
}

impl Default for RawSimConfig {
    fn default() -> Self {
        let SimConfig {
            pair,
            initial_reserve_a,
            initial_reserve_b,
            fee_bps,
            ratio_tolerance,
            curve,
        } = SimConfig::default();
        Self {
            pair,
            initial_reserve_a,
            initial_reserve_b,
            fee_bps,
            ratio_tolerance,
            curve,
        }
    }
}

impl TryFrom<RawSimConfig> for SimConfig {
    type Error = SimError;

    fn try_from(raw: RawSimConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.pair,
            raw.initial_reserve_a,
            raw.initial_reserve_b,
            raw.fee_bps,
            raw.ratio_tolerance,
            raw.curve,
        )
    }
}

impl SimConfig {
    /// Reference initial reserve of asset A.
    pub const DEFAULT_RESERVE_A: f64 = 500.0;

    /// Reference initial reserve of asset B.
    pub const DEFAULT_RESERVE_B: f64 = 1_000.0;

    /// Reference maximum deviation between deposit and pool B/A ratios.
    pub const DEFAULT_RATIO_TOLERANCE: f64 = 0.01;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates the first violation found by [`validate`](Self::validate).
    pub fn new(
        pair: AssetPair,
        initial_reserve_a: f64,
        initial_reserve_b: f64,
        fee_bps: BasisPoints,
        ratio_tolerance: f64,
        curve: CurveConfig,
    ) -> crate::error::Result<Self> {
        let config = Self {
            pair,
            initial_reserve_a,
            initial_reserve_b,
            fee_bps,
            ratio_tolerance,
            curve,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidPool`] if an initial reserve is not positive.
    /// - [`SimError::InvalidFee`] if the fee exceeds 100%.
    /// - [`SimError::InvalidConfiguration`] for a bad tolerance or curve.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.initial_pool()?;
        self.fee_tier()?;
        if !self.ratio_tolerance.is_finite() || self.ratio_tolerance <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "ratio_tolerance must be finite and positive",
            ));
        }
        self.curve.validate()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Builds the initial pool.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPool`] if either reserve is invalid.
    pub fn initial_pool(&self) -> crate::error::Result<PoolState> {
        PoolState::new(self.initial_reserve_a, self.initial_reserve_b)
    }

    /// Builds the fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFee`] if the rate exceeds 100%.
    pub const fn fee_tier(&self) -> crate::error::Result<FeeTier> {
        FeeTier::new(self.fee_bps)
    }

    /// Returns the deposit ratio tolerance.
    #[must_use]
    pub const fn ratio_tolerance(&self) -> f64 {
        self.ratio_tolerance
    }

    /// Returns the curve configuration.
    #[must_use]
    pub const fn curve(&self) -> CurveConfig {
        self.curve
    }

    /// Replaces the asset pair.
    #[must_use]
    pub fn with_pair(mut self, pair: AssetPair) -> Self {
        self.pair = pair;
        self
    }

    /// Replaces the initial reserves.
    #[must_use]
    pub fn with_initial_reserves(mut self, reserve_a: f64, reserve_b: f64) -> Self {
        self.initial_reserve_a = reserve_a;
        self.initial_reserve_b = reserve_b;
        self
    }

    /// Replaces the fee rate.
    #[must_use]
    pub fn with_fee_bps(mut self, fee_bps: BasisPoints) -> Self {
        self.fee_bps = fee_bps;
        self
    }

    /// Replaces the deposit ratio tolerance.
    #[must_use]
    pub fn with_ratio_tolerance(mut self, ratio_tolerance: f64) -> Self {
        self.ratio_tolerance = ratio_tolerance;
        self
    }

    /// Replaces the curve configuration.
    #[must_use]
    pub fn with_curve(mut self, curve: CurveConfig) -> Self {
        self.curve = curve;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            pair: AssetPair::default(),
            initial_reserve_a: Self::DEFAULT_RESERVE_A,
            initial_reserve_b: Self::DEFAULT_RESERVE_B,
            fee_bps: FeeTier::TIER_0_30_PERCENT.basis_points(),
            ratio_tolerance: Self::DEFAULT_RATIO_TOLERANCE,
            curve: CurveConfig::default(),
        }
    }
}
