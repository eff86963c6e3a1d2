//! Slippage-curve samples.

use serde::{Deserialize, Serialize};

/// One point of an input-to-output curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Amount sold into the pool.
    pub input: f64,
    /// Amount received for `input`.
    pub output: f64,
}

impl CurveSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }

    /// Output per unit of input; `None` at the origin.
    #[must_use]
    pub fn average_rate(&self) -> Option<f64> {
        (self.input > 0.0).then(|| self.output / self.input)
    }
}
