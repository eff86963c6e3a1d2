//! Proposed trades and their quotes.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Direction, PoolState, Price, RawAmount};

/// A hypothetical swap: a direction and the amount the trader sells.
///
/// The amount is kept raw; [`RawAmount::parse`] decides at quote time
/// whether the request contributes a quote at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeRequest {
    direction: Direction,
    input_amount: RawAmount,
}

impl TradeRequest {
    /// Creates a request.
    pub fn new(direction: Direction, input_amount: impl Into<RawAmount>) -> Self {
        Self {
            direction,
            input_amount: input_amount.into(),
        }
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the amount exactly as supplied.
    #[must_use]
    pub const fn input_amount(&self) -> &RawAmount {
        &self.input_amount
    }

    /// Replaces the direction, keeping the amount.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Replaces the amount, keeping the direction.
    pub fn set_input_amount(&mut self, input_amount: impl Into<RawAmount>) {
        self.input_amount = input_amount.into();
    }

    /// Clears the amount, keeping the direction.
    pub fn clear_amount(&mut self) {
        self.input_amount = RawAmount::empty();
    }
}

/// The result of quoting a valid [`TradeRequest`] against a pool.
///
/// # Invariants
///
/// - `amount_in > 0`
/// - `0 <= amount_out < pool.reserve(direction.output_side())`
/// - `total_input_with_fee = amount_in + fee`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeQuote {
    direction: Direction,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    total_input_with_fee: Amount,
    spot_price_before: Option<Price>,
    resulting_pool: PoolState,
}

impl TradeQuote {
    pub(crate) const fn new(
        direction: Direction,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        total_input_with_fee: Amount,
        spot_price_before: Option<Price>,
        resulting_pool: PoolState,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            fee,
            total_input_with_fee,
            spot_price_before,
            resulting_pool,
        }
    }

    /// Returns the direction that was quoted.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the amount sold, excluding the fee.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount the trader would receive.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee charged on the input.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns `amount_in + fee`, the amount actually paid into the pool.
    pub const fn total_input_with_fee(&self) -> Amount {
        self.total_input_with_fee
    }

    /// Price of the input asset in output units before the trade.
    #[must_use]
    pub const fn spot_price_before(&self) -> Option<Price> {
        self.spot_price_before
    }

    /// Returns the pool state after the trade.
    #[must_use]
    pub const fn resulting_pool(&self) -> PoolState {
        self.resulting_pool
    }

    /// Realized exchange rate: output units per input unit, fee excluded.
    ///
    /// Returns `None` if the ratio overflows.
    #[must_use]
    pub fn effective_price(&self) -> Option<Price> {
        Price::from_amounts(self.amount_out, self.amount_in).ok()
    }

    /// How far the realized rate falls short of the pre-trade spot rate,
    /// in percent: `(spot - effective) / spot × 100`.
    ///
    /// Returns `None` when either price could not be represented.
    #[must_use]
    pub fn price_impact_percent(&self) -> Option<f64> {
        let spot = self.spot_price_before?.get();
        let effective = self.effective_price()?.get();
        if spot == 0.0 {
            return None;
        }
        Some((spot - effective) / spot * 100.0)
    }
}

impl fmt::Display for TradeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeQuote({}: in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
