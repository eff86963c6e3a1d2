//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_sim::prelude::*;
//! ```

pub use crate::config::{CurveConfig, SimConfig};
pub use crate::domain::{
    Amount, AssetPair, BasisPoints, CurveSample, Direction, FeeTier, LiquidityDecision,
    LiquidityRequest, ParsedAmount, PoolState, Price, RawAmount, RejectReason, Side, TradeQuote,
    TradeRequest,
};
pub use crate::engine::ConstantProductEngine;
pub use crate::error::{Result, SimError};
pub use crate::session::{DerivedView, Session};
pub use crate::traits::{CurveSampler, FromConfig, LiquidityValidator, SwapQuoter};
