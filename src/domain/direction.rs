//! Trade direction between the two pool assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Side;

/// Which asset a trade sells into the pool and which it receives.
///
/// # Examples
///
/// ```
/// use hydra_sim::domain::{Direction, Side};
///
/// let d = Direction::BToA;
/// assert_eq!(d.input_side(), Side::B);
/// assert_eq!(d.output_side(), Side::A);
/// assert_eq!(d.reverse(), Direction::AToB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl Direction {
    /// The side whose reserve grows (the asset paid in).
    #[must_use]
    pub const fn input_side(&self) -> Side {
        match self {
            Self::AToB => Side::A,
            Self::BToA => Side::B,
        }
    }

    /// The side whose reserve shrinks (the asset paid out).
    #[must_use]
    pub const fn output_side(&self) -> Side {
        self.input_side().other()
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl Default for Direction {
    /// Buying asset A with asset B, the default trade of the preview form.
    fn default() -> Self {
        Self::BToA
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A to B"),
            Self::BToA => write!(f, "B to A"),
        }
    }
}
