//! Engine and session configuration.
//!
//! [`SimConfig`] is the declarative blueprint for a simulation: asset
//! symbols, initial reserves, fee rate, deposit ratio tolerance, and the
//! [`CurveConfig`] that shapes the slippage curve. Both types derive
//! `serde` traits so a host can load them from any format; unspecified
//! fields take their reference defaults.

mod curve;
mod sim_config;

pub use curve::CurveConfig;
pub use sim_config::SimConfig;
