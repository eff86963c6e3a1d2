//! Asset identity: pool sides and their display symbols.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::error::SimError;

/// Longest accepted symbol, in characters.
const MAX_SYMBOL_LEN: usize = 16;

/// One of the two sides of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first asset (the base of the quoted price).
    A,
    /// The second asset (the quote of the quoted price).
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Display ticker of an asset, e.g. `PST` or `HKD`.
///
/// Symbols are trimmed, non-empty, at most 16 characters and contain no
/// interior whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetSymbol(String);

impl AssetSymbol {
    /// Creates a validated symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAsset`] if the trimmed symbol is empty,
    /// too long, or contains whitespace.
    pub fn new(symbol: &str) -> crate::error::Result<Self> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(SimError::InvalidAsset("symbol must not be empty"));
        }
        if trimmed.chars().count() > MAX_SYMBOL_LEN {
            return Err(SimError::InvalidAsset("symbol is longer than 16 characters"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(SimError::InvalidAsset("symbol must not contain whitespace"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetSymbol {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AssetSymbol> for String {
    fn from(symbol: AssetSymbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two distinct assets held by a pool.
///
/// Symbols are purely descriptive; the engine addresses assets by
/// [`Side`].
///
/// # Examples
///
/// ```
/// use hydra_sim::domain::{AssetPair, Direction};
///
/// let pair = AssetPair::new("PST", "HKD").expect("distinct symbols");
/// assert_eq!(pair.label(Direction::BToA), "HKD to PST");
/// assert_eq!(pair.parse_direction("PST to HKD"), Some(Direction::AToB));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAssetPair")]
pub struct AssetPair {
    a: AssetSymbol,
    b: AssetSymbol,
}

#[derive(Deserialize)]
struct RawAssetPair {
    a: AssetSymbol,
    b: AssetSymbol,
}

impl TryFrom<RawAssetPair> for AssetPair {
    type Error = SimError;

    fn try_from(raw: RawAssetPair) -> Result<Self, Self::Error> {
        Self::from_symbols(raw.a, raw.b)
    }
}

impl AssetPair {
    /// Creates a pair from two symbol strings.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAsset`] if either symbol is invalid or
    /// both symbols are equal (case-insensitively).
    pub fn new(a: &str, b: &str) -> crate::error::Result<Self> {
        Self::from_symbols(AssetSymbol::new(a)?, AssetSymbol::new(b)?)
    }

    /// Creates a pair from two validated symbols.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAsset`] if the symbols are equal
    /// (case-insensitively).
    pub fn from_symbols(a: AssetSymbol, b: AssetSymbol) -> crate::error::Result<Self> {
        if a.as_str().eq_ignore_ascii_case(b.as_str()) {
            return Err(SimError::InvalidAsset("asset pair requires two distinct symbols"));
        }
        Ok(Self { a, b })
    }

    /// Returns the symbol on `side`.
    #[must_use]
    pub const fn symbol(&self, side: Side) -> &AssetSymbol {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Human label of a trade direction, e.g. `"HKD to PST"`.
    #[must_use]
    pub fn label(&self, direction: Direction) -> String {
        format!(
            "{} to {}",
            self.symbol(direction.input_side()),
            self.symbol(direction.output_side())
        )
    }

    /// Parses a label produced by [`label`](Self::label).
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    #[must_use]
    pub fn parse_direction(&self, label: &str) -> Option<Direction> {
        let label = label.trim();
        [Direction::AToB, Direction::BToA]
            .into_iter()
            .find(|d| self.label(*d).eq_ignore_ascii_case(label))
    }
}

impl Default for AssetPair {
    fn default() -> Self {
        Self {
            a: AssetSymbol("PST".to_owned()),
            b: AssetSymbol("HKD".to_owned()),
        }
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.a, self.b)
    }
}
