// File: crates/chart-core/src/types.rs
// Summary: Shared sizes and paddings for the raster surface.

/// Default surface width in pixels (10:6 figure).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Screen margins around the plot rectangle, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Room for the title above and the rotated y label / tick labels on the left.
    fn default() -> Self {
        Self::new(88, 32, 56, 64)
    }
}
