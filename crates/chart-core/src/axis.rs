// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label and visible range.

use crate::grid::nice_ticks;

/// Target number of major ticks per axis.
pub const TARGET_TICKS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Unit-range axis with the given label, the frame an empty chart is drawn in.
    pub fn unit(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    /// Major tick values inside `[min, max]` plus the step between them.
    pub fn ticks(&self) -> (Vec<f64>, f64) {
        nice_ticks(self.min, self.max, TARGET_TICKS)
    }
}

impl Default for Axis {
    fn default() -> Self { Self::unit("") }
}
