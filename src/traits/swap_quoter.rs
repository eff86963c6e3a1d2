//! Pure swap quoting against a pool snapshot.
//!
//! [`SwapQuoter`] answers "what would happen if I sold this much?" without
//! touching the pool. The fee is charged on top of the input and added to
//! the input-side reserve, but the invariant is evaluated on the input
//! alone:
//!
//! ```text
//! fee        = amount_in × fee_rate
//! amount_out = y − x·y / (x + amount_in)
//! x'         = x + amount_in + fee
//! y'         = y − amount_out
//! ```
//!
//! Because the fee stays in the pool, `x' · y' ≥ x · y` after every quote.

use crate::domain::{FeeTier, PoolState, TradeQuote, TradeRequest};

/// Quotes constant-product swaps.
pub trait SwapQuoter {
    /// Quotes `request` against `pool`.
    ///
    /// Returns `None` when the raw input is not a finite positive number,
    /// or when the resulting reserves could not be represented. Invalid
    /// input is an absent quote, never an error.
    #[must_use]
    fn quote(&self, pool: &PoolState, request: &TradeRequest) -> Option<TradeQuote>;

    /// Returns the fee tier charged on swap inputs.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
