// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests into an RGBA buffer.

use chart_core::{Axis, Chart, ChartError, LegendPosition, Marker, RenderOptions, Series, Theme};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("line", vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (1000, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque light-theme background
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn empty_chart_renders_frame() {
    let mut chart = Chart::new();
    chart.title = "Empty".into();
    chart.legend = Some(LegendPosition::UpperLeft);
    chart.grid = true;
    chart.autoscale_axes(0.05);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _, h, stride) = chart.render_to_rgba8(&opts).expect("empty chart renders");

    // The left edge of the axis frame is drawn in the axis color, not background.
    let frame_x = opts.insets.left as usize;
    let mid_y = h as usize / 2;
    assert_ne!(pixel(&px, stride, frame_x, mid_y), [255, 255, 255, 255]);
}

#[test]
fn markers_use_series_color() {
    let red = chart_core::Color::from_argb(255, 255, 0, 0);
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 2.0);
    chart.y_axis = Axis::new("Y", 0.0, 2.0);
    chart.add_series(Series::with_data("dot", vec![(1.0, 1.0)]).with_marker(Marker::Circle).with_color(red));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("render");

    // A single circle marker lands in the middle of the plot area.
    let cx = (opts.insets.left as usize + (w as usize - opts.insets.right as usize)) / 2;
    let cy = (opts.insets.top as usize + (h as usize - opts.insets.bottom as usize)) / 2;
    assert_eq!(pixel(&px, stride, cx, cy), [255, 0, 0, 255]);
}

#[test]
fn lone_marker_past_integer_precision_is_drawn() {
    let red = chart_core::Color::from_argb(255, 255, 0, 0);
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("big", vec![(2f64.powi(53), 1.0)]).with_marker(Marker::Circle).with_color(red));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("render");

    let cx = (opts.insets.left as usize + (w as usize - opts.insets.right as usize)) / 2;
    let cy = (opts.insets.top as usize + (h as usize - opts.insets.bottom as usize)) / 2;
    assert_eq!(pixel(&px, stride, cx, cy), [255, 0, 0, 255]);
}

#[test]
fn dark_theme_background() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("render");
    assert_eq!(pixel(&px, stride, 1, 1), [18, 18, 20, 255]);
}

#[test]
fn zero_size_is_rejected() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.width = 0;
    let err = chart.render_to_rgba8(&opts).unwrap_err();
    assert!(matches!(err, ChartError::InvalidSize { width: 0, .. }));
}
