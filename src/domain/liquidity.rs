//! Proposed two-sided deposits and the admissibility decision.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, ParsedAmount, PoolState, RawAmount};

/// A hypothetical deposit of both pool assets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiquidityRequest {
    amount_a: RawAmount,
    amount_b: RawAmount,
}

impl LiquidityRequest {
    /// Creates a request from raw amounts of asset A and asset B.
    pub fn new(amount_a: impl Into<RawAmount>, amount_b: impl Into<RawAmount>) -> Self {
        Self {
            amount_a: amount_a.into(),
            amount_b: amount_b.into(),
        }
    }

    /// Returns the raw amount of asset A.
    #[must_use]
    pub const fn amount_a(&self) -> &RawAmount {
        &self.amount_a
    }

    /// Returns the raw amount of asset B.
    #[must_use]
    pub const fn amount_b(&self) -> &RawAmount {
        &self.amount_b
    }

    /// Returns `true` when both fields are blank text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.amount_a.is_blank() && self.amount_b.is_blank()
    }

    /// Parses both sides; `None` unless both are valid positive amounts.
    #[must_use]
    pub fn parse(&self) -> Option<(Amount, Amount)> {
        match (self.amount_a.parse(), self.amount_b.parse()) {
            (ParsedAmount::Valid(a), ParsedAmount::Valid(b)) => Some((a, b)),
            _ => None,
        }
    }
}

/// Why a deposit left the pool unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// At least one side was empty, unparsable, non-finite or not positive.
    InvalidAmounts,
    /// The deposit's B/A ratio is too far from the pool's.
    RatioMismatch {
        /// The pool's `reserve_b / reserve_a`.
        expected: f64,
        /// The deposit's `amount_b / amount_a`.
        proposed: f64,
    },
    /// Adding the deposit would overflow a reserve.
    NonFiniteResult,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmounts => write!(f, "deposit amounts are not both positive numbers"),
            Self::RatioMismatch { expected, proposed } => write!(
                f,
                "deposit ratio {proposed} does not match pool ratio {expected}"
            ),
            Self::NonFiniteResult => write!(f, "deposit would overflow the pool reserves"),
        }
    }
}

/// Outcome of evaluating a [`LiquidityRequest`] against a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LiquidityDecision {
    /// The deposit is admissible; carries the resulting pool.
    Accepted {
        /// Pool after both sides are added.
        pool: PoolState,
    },
    /// The deposit contributes nothing.
    Rejected {
        /// The reason the pool is unchanged.
        #[serde(flatten)]
        reason: RejectReason,
    },
}

impl LiquidityDecision {
    /// Returns `true` if the deposit was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the resulting pool, falling back to `original` when the
    /// deposit was rejected.
    #[must_use]
    pub const fn pool_or(&self, original: PoolState) -> PoolState {
        match self {
            Self::Accepted { pool } => *pool,
            Self::Rejected { .. } => original,
        }
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub const fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }
}
