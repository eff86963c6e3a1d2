//! Core trait abstractions for pool simulation.
//!
//! The engine is split along three seams, each a pure function of a pool
//! snapshot:
//!
//! - [`SwapQuoter`] quotes trades.
//! - [`LiquidityValidator`] decides whether a deposit is admissible.
//! - [`CurveSampler`] samples the slippage curve.
//!
//! [`FromConfig`] builds implementors from a validated configuration.

mod curve_sampler;
mod from_config;
mod liquidity_validator;
mod swap_quoter;

pub use curve_sampler::CurveSampler;
pub use from_config::FromConfig;
pub use liquidity_validator::LiquidityValidator;
pub use swap_quoter::SwapQuoter;
