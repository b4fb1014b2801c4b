// File: crates/chart-core/src/view.rs
// Visible data ranges and autoscale from series extents.

use crate::scale::min_span;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Unit frame used when there is nothing to fit.
    pub const UNIT: Self = Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };

    /// Fit all series, padding each side by `margin` times the data span.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let extent = chart
            .series
            .iter()
            .filter_map(|s| s.extent())
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = extent else {
            return Self::UNIT;
        };
        // a single point or a flat line still needs a non-zero span
        if (x_max - x_min).abs() < 1e-9 { (x_min, x_max) = widen(x_min); }
        if (y_max - y_min).abs() < 1e-9 { (y_min, y_max) = widen(y_min); }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn widen(v: f64) -> (f64, f64) {
    let half = min_span(v) / 2.0;
    (v - half, v + half)
}
