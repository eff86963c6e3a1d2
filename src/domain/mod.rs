//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model a two-asset
//! constant-product pool: amounts, prices, fees, pool reserves, trade and
//! deposit requests, quotes and curve samples. Types with invariants use
//! newtypes with validated constructors.

mod amount;
mod asset;
mod basis_points;
mod curve;
mod direction;
mod fee_tier;
mod liquidity;
mod pool_state;
mod price;
mod raw_amount;
mod trade;

pub use amount::Amount;
pub use asset::{AssetPair, AssetSymbol, Side};
pub use basis_points::BasisPoints;
pub use curve::CurveSample;
pub use direction::Direction;
pub use fee_tier::{FeeBreakdown, FeeTier};
pub use liquidity::{LiquidityDecision, LiquidityRequest, RejectReason};
pub use pool_state::PoolState;
pub use price::Price;
pub use raw_amount::{ParsedAmount, RawAmount};
pub use trade::{TradeQuote, TradeRequest};
