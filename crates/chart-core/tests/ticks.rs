// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick step selection, placement and label formatting.

use chart_core::grid::{format_tick, nice_step, nice_ticks};
use chart_core::Axis;

#[test]
fn nice_steps_follow_1_2_5() {
    assert_eq!(nice_step(10.0, 10), 1.0);
    assert_eq!(nice_step(2000.0, 8), 500.0);
    assert_eq!(nice_step(45.0, 8), 10.0);
    assert_eq!(nice_step(0.0, 8), 1.0);
}

#[test]
fn ticks_stay_inside_range() {
    let (ticks, step) = nice_ticks(-95.0, 1995.0, 8);
    assert_eq!(step, 500.0);
    assert_eq!(ticks, vec![0.0, 500.0, 1000.0, 1500.0]);
}

#[test]
fn reversed_range_is_normalised() {
    let (a, _) = nice_ticks(0.0, 1.0, 5);
    let (b, _) = nice_ticks(1.0, 0.0, 5);
    assert_eq!(a, b);
}

#[test]
fn labels_use_step_precision() {
    assert_eq!(format_tick(1500.0, 500.0), "1500");
    assert_eq!(format_tick(0.5, 0.5), "0.5");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
    assert_eq!(format_tick(0.0, 0.2), "0.0");
}

#[test]
fn unit_axis_ticks() {
    let (ticks, step) = Axis::unit("t").ticks();
    assert!((step - 0.2).abs() < 1e-12);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0], 0.0);
}
