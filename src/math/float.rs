//! Checked `f64` arithmetic.
//!
//! Every operation returns [`Err`] when the result is NaN or infinite, so
//! a non-finite value can never leak into a reserve.

use crate::error::SimError;

/// Returns `value` if it is finite.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] tagged with `context` otherwise.
#[inline]
pub fn finite(value: f64, context: &'static str) -> Result<f64, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NonFinite(context))
    }
}

/// Checked addition.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if the sum overflows.
#[inline]
pub fn checked_add(a: f64, b: f64) -> Result<f64, SimError> {
    finite(a + b, "float addition overflow")
}

/// Checked subtraction.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if the difference overflows.
#[inline]
pub fn checked_sub(a: f64, b: f64) -> Result<f64, SimError> {
    finite(a - b, "float subtraction overflow")
}

/// Checked multiplication.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if the product overflows.
#[inline]
pub fn checked_mul(a: f64, b: f64) -> Result<f64, SimError> {
    finite(a * b, "float multiplication overflow")
}

/// Checked division.
///
/// # Errors
///
/// Returns [`SimError::NonFinite`] if `divisor` is zero or the quotient
/// overflows.
#[inline]
pub fn checked_div(dividend: f64, divisor: f64) -> Result<f64, SimError> {
    if divisor == 0.0 {
        return Err(SimError::NonFinite("float division by zero"));
    }
    finite(dividend / divisor, "float division overflow")
}
