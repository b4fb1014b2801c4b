// File: crates/ring-bench/src/plot.rs
// Summary: Builds the ring-size vs computation-time chart and hands it to a display surface.

use chart_core::{Axis, Chart, LegendPosition, Marker, RenderOptions, Series};
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::extract::SeriesTriple;

pub const TITLE: &str = "Correlation between Ring Size and Computation Time";
pub const X_LABEL: &str = "Ring Size";
pub const Y_LABEL: &str = "Computation time (s)";
pub const GENERATION_LABEL: &str = "Generation Time";
pub const VERIFICATION_LABEL: &str = "Verification Time";

/// Figure size in pixels, 10:6.
pub const FIGURE_WIDTH: i32 = 1000;
pub const FIGURE_HEIGHT: i32 = 600;

/// Fraction of the data span left empty on each side of both axes.
pub const AXIS_MARGIN: f64 = 0.05;

/// Anything that can put a finished chart in front of the user.
pub trait DisplaySurface {
    fn show(&mut self, chart: &Chart, options: &RenderOptions) -> Result<()>;
}

/// Render settings for the benchmark figure.
pub fn figure_options() -> RenderOptions {
    RenderOptions { width: FIGURE_WIDTH, height: FIGURE_HEIGHT, ..RenderOptions::default() }
}

/// Assemble the two-series chart. An empty triple yields axes, title and legend with no points.
pub fn build_chart(triple: &SeriesTriple) -> Result<Chart> {
    if !triple.is_aligned() {
        return Err(RenderError::LengthMismatch {
            sizes: triple.sizes.len(),
            generation: triple.generation_seconds.len(),
            verification: triple.verification_seconds.len(),
        }
        .into());
    }

    let mut chart = Chart::new();
    chart.title = TITLE.to_owned();
    chart.x_axis = Axis::unit(X_LABEL);
    chart.y_axis = Axis::unit(Y_LABEL);
    chart.grid = true;
    chart.legend = Some(LegendPosition::UpperLeft);
    chart.add_series(Series::with_data(GENERATION_LABEL, triple.generation_points()).with_marker(Marker::Circle));
    chart.add_series(Series::with_data(VERIFICATION_LABEL, triple.verification_points()).with_marker(Marker::Cross));
    chart.autoscale_axes(AXIS_MARGIN);

    debug!(
        points = triple.len(),
        x_min = chart.x_axis.min,
        x_max = chart.x_axis.max,
        y_min = chart.y_axis.min,
        y_max = chart.y_axis.max,
        "built benchmark chart"
    );
    Ok(chart)
}

/// Build the chart for `triple` and show it on `surface`.
pub fn render<S: DisplaySurface + ?Sized>(triple: &SeriesTriple, surface: &mut S) -> Result<()> {
    let chart = build_chart(triple)?;
    surface.show(&chart, &figure_options())
}

/// A rendered RGBA8 frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

/// Off-screen surface: rasterizes every shown chart and keeps the latest frame.
#[derive(Debug, Default)]
pub struct RasterSurface {
    pub chart: Option<Chart>,
    pub frame: Option<Frame>,
}

impl RasterSurface {
    pub fn new() -> Self { Self::default() }
}

impl DisplaySurface for RasterSurface {
    fn show(&mut self, chart: &Chart, options: &RenderOptions) -> Result<()> {
        let (pixels, width, height, stride) = chart.render_to_rgba8(options)?;
        self.frame = Some(Frame { pixels, width, height, stride });
        self.chart = Some(chart.clone());
        Ok(())
    }
}
