//! Proportional trading fee built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints};
use crate::error::SimError;

/// A fixed proportional fee charged on the input side of a trade.
///
/// The fee is charged *on top of* the traded amount: a trader who swaps
/// `x` pays `x + fee` into the pool, and the fee stays in the pool's
/// input-side reserve.
///
/// # Examples
///
/// ```
/// use hydra_sim::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// let breakdown = tier.apply_fee(Amount::new(100.0).expect("finite")).expect("finite");
/// assert!((breakdown.fee().get() - 0.3).abs() < 1e-12);
/// assert!((breakdown.total_with_fee().get() - 100.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.01% fee (1 bp).
    pub const TIER_0_01_PERCENT: Self = Self(BasisPoints::new(1));

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), the reference rate.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFee`] if the rate exceeds 100%.
    pub const fn new(basis_points: BasisPoints) -> crate::error::Result<Self> {
        if !basis_points.is_valid_percent() {
            return Err(SimError::InvalidFee("fee rate cannot exceed 100%"));
        }
        Ok(Self(basis_points))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the fee as a fraction (`0.003` for 30 bp).
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.0.as_fraction()
    }

    /// Computes the fee owed on `amount` and the fee-inclusive total.
    ///
    /// Returns `None` only if the total is not representable as a finite
    /// amount.
    #[must_use]
    pub fn apply_fee(&self, amount: Amount) -> Option<FeeBreakdown> {
        let fee = self.0.apply(amount)?;
        let total_with_fee = amount.checked_add(&fee)?;
        Some(FeeBreakdown {
            fee,
            total_with_fee,
        })
    }

    /// Returns `true` if this tier matches one of the four standard presets.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0.get(), 1 | 5 | 30 | 100)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

/// The fee charged on a trade input and the total the trader pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    fee: Amount,
    total_with_fee: Amount,
}

impl FeeBreakdown {
    /// Returns the fee amount.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns `amount + fee`.
    pub const fn total_with_fee(&self) -> Amount {
        self.total_with_fee
    }
}
