//! Asset quantity with checked floating-point arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A quantity of one asset, expressed in whole display units.
///
/// `Amount` wraps an `f64` that is always finite and non-negative.
/// Arithmetic methods are checked: they return `None` when the result
/// would be negative, NaN or infinite instead of producing an invalid
/// quantity.
///
/// # Examples
///
/// ```
/// use hydra_sim::domain::Amount;
///
/// let a = Amount::new(100.0).expect("finite");
/// let b = Amount::new(250.5).expect("finite");
/// assert_eq!(a.checked_add(&b).map(|s| s.get()), Some(350.5));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[must_use]
pub struct Amount(f64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidQuantity`] if `value` is negative, NaN
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() {
            return Err(SimError::InvalidQuantity("amount must be finite"));
        }
        if value < 0.0 {
            return Err(SimError::InvalidQuantity("amount must be non-negative"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Checked addition. Returns `None` if the sum is not finite.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        Self::new(self.0 + other.0).ok()
    }

    /// Checked subtraction. Returns `None` if the difference is negative.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        Self::new(self.0 - other.0).ok()
    }

    /// Checked multiplication. Returns `None` if the product is not finite.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        Self::new(self.0 * other.0).ok()
    }

    /// Checked division. Returns `None` if `divisor` is zero or the
    /// quotient is not finite.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        Self::new(self.0 / divisor.0).ok()
    }
}

impl TryFrom<f64> for Amount {
    type Error = SimError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
