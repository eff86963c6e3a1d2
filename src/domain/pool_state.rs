//! Reserves of a two-asset constant-product pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Price, Side};
use crate::error::SimError;

/// Reserves of the two pool assets.
///
/// Both reserves are always finite and strictly positive: a zero reserve
/// leaves the price undefined and is never a valid state. A `PoolState`
/// is a plain value; operations return new states instead of mutating
/// an existing one.
///
/// # Examples
///
/// ```
/// use hydra_sim::domain::{PoolState, Side};
///
/// let pool = PoolState::new(500.0, 1000.0).expect("positive reserves");
/// assert_eq!(pool.price().expect("finite").get(), 2.0);
/// assert_eq!(pool.reserve(Side::A).get(), 500.0);
/// assert!(PoolState::new(0.0, 1000.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoolState")]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
}

#[derive(Deserialize)]
struct RawPoolState {
    reserve_a: f64,
    reserve_b: f64,
}

impl TryFrom<RawPoolState> for PoolState {
    type Error = SimError;

    fn try_from(raw: RawPoolState) -> Result<Self, Self::Error> {
        Self::new(raw.reserve_a, raw.reserve_b)
    }
}

impl PoolState {
    /// Creates a pool from raw reserves.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPool`] if either reserve is not a finite
    /// number greater than zero.
    pub fn new(reserve_a: f64, reserve_b: f64) -> crate::error::Result<Self> {
        let reserve_a = Amount::new(reserve_a)
            .map_err(|_| SimError::InvalidPool("reserve_a must be finite and positive"))?;
        let reserve_b = Amount::new(reserve_b)
            .map_err(|_| SimError::InvalidPool("reserve_b must be finite and positive"))?;
        Self::from_amounts(reserve_a, reserve_b)
    }

    /// Creates a pool from validated amounts.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPool`] if either amount is zero.
    pub fn from_amounts(reserve_a: Amount, reserve_b: Amount) -> crate::error::Result<Self> {
        if !reserve_a.is_positive() {
            return Err(SimError::InvalidPool("reserve_a must be finite and positive"));
        }
        if !reserve_b.is_positive() {
            return Err(SimError::InvalidPool("reserve_b must be finite and positive"));
        }
        Ok(Self {
            reserve_a,
            reserve_b,
        })
    }

    /// Creates a pool from the reserves of an input and an output side.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPool`] if either amount is zero.
    pub fn from_sides(
        input_side: Side,
        input_reserve: Amount,
        output_reserve: Amount,
    ) -> crate::error::Result<Self> {
        match input_side {
            Side::A => Self::from_amounts(input_reserve, output_reserve),
            Side::B => Self::from_amounts(output_reserve, input_reserve),
        }
    }

    /// Returns a copy with the reserve on `side` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPool`] if `reserve` is zero.
    pub fn with_reserve(&self, side: Side, reserve: Amount) -> crate::error::Result<Self> {
        match side {
            Side::A => Self::from_amounts(reserve, self.reserve_b),
            Side::B => Self::from_amounts(self.reserve_a, reserve),
        }
    }

    /// Returns the reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the reserve on `side`.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Price of asset A in units of asset B: `reserve_b / reserve_a`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFinite`] if the ratio overflows.
    pub fn price(&self) -> crate::error::Result<Price> {
        self.spot_price(Side::A)
    }

    /// Price of the `base` asset in units of the other asset.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFinite`] if the ratio overflows.
    pub fn spot_price(&self, base: Side) -> crate::error::Result<Price> {
        Price::from_amounts(self.reserve(base.other()), self.reserve(base))
    }

    /// The constant-product invariant `k = reserve_a × reserve_b`.
    ///
    /// Returns `None` if the product overflows.
    #[must_use]
    pub fn invariant(&self) -> Option<Amount> {
        self.reserve_a.checked_mul(&self.reserve_b)
    }

    /// Fraction of the combined reserves held on `side`, in `0.0..1.0`.
    ///
    /// The two sides' shares sum to one. This is a unit-naive measure of
    /// pool composition used for display.
    #[must_use]
    pub fn composition(&self, side: Side) -> f64 {
        let a = self.reserve_a.get();
        let b = self.reserve_b.get();
        // Scale before summing so two huge reserves cannot overflow.
        let max = a.max(b);
        let share = self.reserve(side).get() / max;
        share / (a / max + b / max)
    }

    /// LP supply minted by seeding an empty pool with these reserves:
    /// `√(reserve_a × reserve_b)`.
    #[must_use]
    pub fn genesis_lp_supply(&self) -> f64 {
        self.reserve_a.get().sqrt() * self.reserve_b.get().sqrt()
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "PoolState(a={:.*}, b={:.*})",
                p, self.reserve_a, p, self.reserve_b
            ),
            None => write!(f, "PoolState(a={}, b={})", self.reserve_a, self.reserve_b),
        }
    }
}
