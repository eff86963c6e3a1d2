//! Configurable simulation engines.
//!
//! [`ConstantProductEngine`] implements every trait seam in
//! [`crate::traits`] for the `x · y = k` invariant.

pub mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::ConstantProductEngine;
