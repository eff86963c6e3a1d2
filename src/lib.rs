//! # Hydra Sim
//!
//! Preview engine for a two-asset constant-product liquidity pool
//! (`x · y = k`). Given a pool's reserves it quotes trades, charges fees,
//! checks whether a deposit matches the pool's price, and samples the
//! slippage curve, all without moving any real assets. A caller proposes
//! a hypothetical trade or deposit, inspects the outcome, and decides
//! whether to commit it.
//!
//! The core is pure and synchronous. Raw user input (text or numbers) is
//! accepted at the boundary and validated there: an unparsable or
//! non-positive amount yields no quote, and an inadmissible deposit
//! leaves the pool unchanged. Only construction can fail.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_sim::prelude::*;
//!
//! // 1. Build a session from the reference configuration:
//! //    500 PST / 1000 HKD, 0.30% fee.
//! let mut session = Session::new(&SimConfig::default()).expect("valid config");
//!
//! // 2. Preview selling 100 HKD for PST.
//! session.set_trade_direction(Direction::BToA);
//! session.set_trade_amount("100");
//! let view = session.recompute();
//!
//! let quote = view.trade_quote().expect("valid input");
//! assert!((quote.fee().get() - 0.3).abs() < 1e-9);
//! assert!((quote.amount_out().get() - 45.454_545).abs() < 1e-6);
//! assert_eq!(view.curve().len(), 101);
//!
//! // 3. Commit the previewed pool.
//! let pool = session.commit();
//! assert!((pool.reserve_a().get() - 454.545_454).abs() < 1e-6);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Session    │  pending inputs, recompute → DerivedView, commit
//! └──────┬──────┘
//!        │ simulate(trade, deposit)
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  ConstantProductEngine (FromConfig<SimConfig>)
//! └──────┬──────┘
//!        │ SwapQuoter + LiquidityValidator + CurveSampler
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  PoolState, Amount, RawAmount, TradeQuote, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`PoolState`](domain::PoolState), [`Amount`](domain::Amount), [`RawAmount`](domain::RawAmount), etc. |
//! | [`traits`] | [`SwapQuoter`](traits::SwapQuoter), [`LiquidityValidator`](traits::LiquidityValidator), [`CurveSampler`](traits::CurveSampler), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`SimConfig`](config::SimConfig) and [`CurveConfig`](config::CurveConfig) |
//! | [`engine`] | [`ConstantProductEngine`](engine::ConstantProductEngine) |
//! | [`session`] | [`Session`](session::Session), [`DerivedView`](session::DerivedView), the compound step |
//! | [`api`] | Free functions over the reference engine |
//! | [`math`] | Checked float arithmetic and raw invariant formulas |
//! | [`error`] | [`SimError`](error::SimError) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits `tracing` events (`debug` for session recomputation and
//! commits, `trace` for discarded inputs) and never installs a subscriber.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod session;
pub mod traits;
