//! Parse-then-validate boundary for user-typed quantities.
//!
//! Inputs arrive from a form as free text or as numbers. Every consumer
//! goes through [`RawAmount::parse`], which yields a tagged
//! [`ParsedAmount`]: either a valid, strictly positive, finite
//! [`Amount`] or `Invalid`. Partially typed text such as `""`, `"-"` or
//! `"1e"` is simply `Invalid`, never an error.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// A quantity exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A numeric value from a typed API.
    Number(f64),
    /// Free-form text from an input field.
    Text(String),
}

impl RawAmount {
    /// An empty text field.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Returns `true` for text that is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Parses and validates the quantity.
    ///
    /// Text is trimmed and parsed as a decimal or scientific-notation
    /// float. The result is [`ParsedAmount::Valid`] only for finite values
    /// strictly greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydra_sim::domain::{ParsedAmount, RawAmount};
    ///
    /// assert!(RawAmount::from(" 100 ").parse().is_valid());
    /// assert!(RawAmount::from(2.5).parse().is_valid());
    /// assert_eq!(RawAmount::from("abc").parse(), ParsedAmount::Invalid);
    /// assert_eq!(RawAmount::from(-5).parse(), ParsedAmount::Invalid);
    /// assert_eq!(RawAmount::from("").parse(), ParsedAmount::Invalid);
    /// ```
    #[must_use]
    pub fn parse(&self) -> ParsedAmount {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => return ParsedAmount::Invalid,
            },
        };
        match Amount::new(value) {
            Ok(amount) if amount.is_positive() => ParsedAmount::Valid(amount),
            _ => ParsedAmount::Invalid,
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawAmount {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RawAmount {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Amount> for RawAmount {
    fn from(value: Amount) -> Self {
        Self::Number(value.get())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Outcome of validating a [`RawAmount`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedAmount {
    /// A finite quantity strictly greater than zero.
    Valid(Amount),
    /// Empty, unparsable, non-finite, zero or negative input.
    Invalid,
}

impl ParsedAmount {
    /// Returns `true` for [`ParsedAmount::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the validated amount, if any.
    #[must_use]
    pub const fn amount(&self) -> Option<Amount> {
        match self {
            Self::Valid(a) => Some(*a),
            Self::Invalid => None,
        }
    }
}

impl From<ParsedAmount> for Option<Amount> {
    fn from(parsed: ParsedAmount) -> Self {
        parsed.amount()
    }
}
