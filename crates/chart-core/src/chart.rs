// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the CPU raster rendering pipeline (grid, axes, series, title, legend).

use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

use crate::geometry::RectI32;
use crate::grid::format_tick;
use crate::scale::LinearScale;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 5.0;
const MARKER_RADIUS: f32 = 4.0;
const LEGEND_ROW: f32 = 22.0;
const LEGEND_PAD: f32 = 10.0;
const LEGEND_SAMPLE: f32 = 28.0;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },
    #[error("failed to read back rendered pixels")]
    ReadPixels,
}

/// Corner of the plot area the legend box is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
    LowerRight,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is the only platform-dependent output; tests switch it off for stable pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendPosition>,
    pub grid: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            legend: None,
            grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Number of data points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Fit both axes to the data, padded by `margin` times the span on each side.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(ChartError::InvalidSize { width: opts.width, height: opts.height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::SurfaceAllocation { width: opts.width, height: opts.height })?;

        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Draw the whole chart onto `canvas`, which is assumed to be `opts.width` x `opts.height`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let xs = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);
        let (x_ticks, x_step) = self.x_axis.ticks();
        let (y_ticks, y_step) = self.y_axis.ticks();
        debug!(
            series = self.series.len(),
            points = self.point_count(),
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            "drawing chart"
        );

        if self.grid {
            draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);
        }
        draw_frame(canvas, &plot, theme);
        draw_tick_marks(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);

        // Series are clipped to the plot area; markers at the edge are cut, not spilled.
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32),
            skia::ClipOp::Intersect,
            true,
        );
        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, &xs, &ys, s, color);
            draw_markers(canvas, &xs, &ys, s, color);
        }
        canvas.restore();

        let shaper = opts.draw_labels.then(TextShaper::new);
        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &plot, &xs, &ys, (x_ticks.as_slice(), x_step), (y_ticks.as_slice(), y_step), theme);
            draw_titles(canvas, shaper, &plot, opts, self);
        }
        if let Some(position) = self.legend {
            draw_legend(canvas, shaper.as_ref(), &plot, position, self, theme);
        }
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals
    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    let rect = skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_rect(rect, &paint);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.tick, 1.0);
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &paint);
    }
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    (x_ticks, x_step): (&[f64], f64),
    (y_ticks, y_step): (&[f64], f64),
    theme: &Theme,
) {
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in x_ticks {
        let text = format_tick(x, x_step);
        shaper.draw_centered(canvas, &text, xs.to_px(x), b + TICK_LEN + TICK_SIZE + 4.0, TICK_SIZE, theme.tick, true);
    }
    for &y in y_ticks {
        let text = format_tick(y, y_step);
        shaper.draw_right(canvas, &text, l - TICK_LEN - 4.0, ys.to_px(y) + TICK_SIZE * 0.4, TICK_SIZE, theme.tick, true);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, opts: &RenderOptions, chart: &Chart) {
    let theme = &opts.theme;
    if !chart.title.is_empty() {
        let baseline = (plot.top as f32 * 0.5 + TITLE_SIZE * 0.4).max(TITLE_SIZE);
        shaper.draw_centered(canvas, &chart.title, plot.center_x(), baseline, TITLE_SIZE, theme.title, false);
    }
    if !chart.x_axis.label.is_empty() {
        let baseline = (opts.height as f32 - 12.0).max(plot.bottom as f32 + LABEL_SIZE);
        shaper.draw_centered(canvas, &chart.x_axis.label, plot.center_x(), baseline, LABEL_SIZE, theme.axis_label, false);
    }
    if !chart.y_axis.label.is_empty() {
        shaper.draw_vertical(canvas, &chart.y_axis.label, LABEL_SIZE, plot.center_y(), LABEL_SIZE, theme.axis_label);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((xs.to_px(x0), ys.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    canvas.draw_path(&path, &stroke_paint(color, 2.0));
}

fn draw_markers(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, color: skia::Color) {
    if series.marker == Marker::None {
        return;
    }
    for &(x, y) in &series.data_xy {
        draw_marker(canvas, series.marker, (xs.to_px(x), ys.to_px(y)), color);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, (cx, cy): (f32, f32), color: skia::Color) {
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((cx, cy), MARKER_RADIUS, &fill_paint(color));
        }
        Marker::Cross => {
            let paint = stroke_paint(color, 2.0);
            let r = MARKER_RADIUS;
            canvas.draw_line((cx - r, cy - r), (cx + r, cy + r), &paint);
            canvas.draw_line((cx - r, cy + r), (cx + r, cy - r), &paint);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    plot: &RectI32,
    position: LegendPosition,
    chart: &Chart,
    theme: &Theme,
) {
    if chart.series.is_empty() {
        return;
    }
    // Without a shaper the labels are skipped but the box keeps a fixed width.
    let text_w = shaper
        .map(|s| chart.series.iter().map(|se| s.measure_width(&se.label, LABEL_SIZE, false)).fold(0.0f32, f32::max))
        .unwrap_or(96.0);
    let w = LEGEND_PAD * 3.0 + LEGEND_SAMPLE + text_w;
    let h = LEGEND_PAD * 2.0 + LEGEND_ROW * chart.series.len() as f32;

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let (x, y) = match position {
        LegendPosition::UpperLeft => (l + LEGEND_PAD, t + LEGEND_PAD),
        LegendPosition::UpperRight => (r - LEGEND_PAD - w, t + LEGEND_PAD),
        LegendPosition::LowerRight => (r - LEGEND_PAD - w, b - LEGEND_PAD - h),
    };
    let rect = skia::Rect::from_xywh(x, y, w, h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(theme.legend_fill));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(theme.legend_border, 1.0));

    for (i, s) in chart.series.iter().enumerate() {
        let color = s.color.unwrap_or_else(|| theme.series_color(i));
        let row_mid = y + LEGEND_PAD + LEGEND_ROW * (i as f32 + 0.5);
        let sx0 = x + LEGEND_PAD;
        let sx1 = sx0 + LEGEND_SAMPLE;
        canvas.draw_line((sx0, row_mid), (sx1, row_mid), &stroke_paint(color, 2.0));
        draw_marker(canvas, s.marker, ((sx0 + sx1) * 0.5, row_mid), color);
        if let Some(shaper) = shaper {
            shaper.draw_left(canvas, &s.label, sx1 + LEGEND_PAD, row_mid + LABEL_SIZE * 0.35, LABEL_SIZE, theme.axis_label, false);
        }
    }
}
