//! Unified error types for the simulation engine.
//!
//! Only construction can fail. Malformed trade or deposit input is never
//! an error: quoting yields `None` and liquidity provision leaves the pool
//! unchanged, so interactive recomputation on partially typed input never
//! has to branch on `Err`.

use thiserror::Error;

/// Errors returned by fallible constructors across the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A pool reserve was zero, negative, NaN or infinite.
    #[error("invalid pool: {0}")]
    InvalidPool(&'static str),

    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An asset quantity was negative, NaN or infinite.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A fee rate could not be used (above 100%).
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// An asset symbol or asset pair is malformed.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A floating-point operation produced NaN or an infinity.
    #[error("non-finite arithmetic result: {0}")]
    NonFinite(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SimError>;
