//! Generic construction trait for configuration-driven instantiation.
//!
//! [`FromConfig`] gives engines and sessions one uniform way to be built
//! from a declarative configuration struct.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction. A successfully constructed value is guaranteed to be in a
//! usable initial state:
//!
//! - Asset symbols are well formed and distinct
//! - Fee rate does not exceed 100%
//! - Initial reserves are finite and positive
//! - Ratio tolerance and curve shape are in range
//!
//! # No Generic Blanket Implementation
//!
//! There is no `impl<T> FromConfig<T>` blanket. Each type explicitly
//! implements the trait for the configuration it understands.

use crate::error::SimError;

/// Construction of `Self` from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<SimConfig> for ConstantProductEngine`
/// - `impl FromConfig<SimConfig> for Session`
///
/// # Errors
///
/// Returns [`SimError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference so it can be reused to
    /// build several engines or sessions.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidConfiguration`] for an out-of-range parameter.
    /// - [`SimError::InvalidPool`] if an initial reserve is not positive.
    /// - [`SimError::InvalidFee`] if the fee rate exceeds 100%.
    fn from_config(config: &C) -> Result<Self, SimError>
    where
        Self: Sized;
}
