//! Exchange rate between the two pool assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::SimError;

/// Exchange rate as a dimensionless ratio (`quote units per base unit`).
///
/// Wraps an `f64` value that must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use hydra_sim::domain::{Amount, Price};
///
/// let hkd = Amount::new(1000.0).expect("finite");
/// let pst = Amount::new(500.0).expect("finite");
/// let price = Price::from_amounts(hkd, pst).expect("non-zero base");
/// assert_eq!(price.get(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFinite`] if the value is NaN or infinite,
    /// and [`SimError::InvalidQuantity`] if it is negative.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() {
            return Err(SimError::NonFinite("price must be finite"));
        }
        if value < 0.0 {
            return Err(SimError::InvalidQuantity("price must be non-negative"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes a price from two amounts: `quote / base`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFinite`] if `base` is zero or the ratio
    /// overflows.
    pub fn from_amounts(quote: Amount, base: Amount) -> crate::error::Result<Self> {
        if base.is_zero() {
            return Err(SimError::NonFinite("price base amount is zero"));
        }
        Self::new(quote.get() / base.get())
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFinite`] if the price is zero or the
    /// reciprocal overflows.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.0 == 0.0 {
            return Err(SimError::NonFinite("cannot invert a zero price"));
        }
        Self::new(1.0 / self.0)
    }

    /// Absolute distance between two prices.
    #[must_use]
    pub fn abs_diff(&self, other: &Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl TryFrom<f64> for Price {
    type Error = SimError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
