// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several line series.

use chart_core::{Chart, Series, ViewState};

#[test]
fn autoscale_two_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data("b", vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 5.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (1.0, 6.0));
}

#[test]
fn autoscale_pads_by_margin() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 0.0), (10.0, 20.0)]));
    chart.autoscale_axes(0.05);

    assert!((chart.x_axis.min - -0.5).abs() < 1e-12);
    assert!((chart.x_axis.max - 10.5).abs() < 1e-12);
    assert!((chart.y_axis.min - -1.0).abs() < 1e-12);
    assert!((chart.y_axis.max - 21.0).abs() < 1e-12);
}

#[test]
fn single_point_gets_nonzero_span() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("p", vec![(3.0, 7.0)]));
    let view = ViewState::from_chart(&chart, 0.0);
    assert_eq!(view, ViewState { x_min: 2.5, x_max: 3.5, y_min: 6.5, y_max: 7.5 });
}

#[test]
fn single_huge_point_stays_centered() {
    let big = 2f64.powi(53);
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("p", vec![(big, 1e300)]));
    let view = ViewState::from_chart(&chart, 0.0);
    assert_eq!((view.x_min, view.x_max), (big - 4.0, big + 4.0));
    assert!(view.y_max > view.y_min);
    assert_eq!((view.x_min + view.x_max) / 2.0, big);
}

#[test]
fn empty_series_fall_back_to_unit_frame() {
    let mut chart = Chart::new();
    chart.add_series(Series::new("nothing"));
    assert_eq!(ViewState::from_chart(&chart, 0.05), ViewState::UNIT);
}
