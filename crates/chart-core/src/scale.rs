// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transform used for both axes.

/// Smallest span worth drawing around `v`: one unit, or a few ulps once `v`
/// is large enough that `v + 1.0 == v`.
pub fn min_span(v: f64) -> f64 {
    (v.abs() * f64::EPSILON * 4.0).max(1.0)
}

/// Maps a data interval `[min, max]` onto the pixel interval `[px_start, px_end]`.
/// For a vertical axis pass `px_start = bottom`, `px_end = top` so larger values land higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, min: f64, mut max: f64) -> Self {
        if (max - min).abs() < 1e-12 { max = min + min_span(min); }
        Self { px_start, px_end, min, max }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = ((v - self.min) / (self.max - self.min)) as f32;
        self.px_start + t * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = self.px_end - self.px_start;
        if len.abs() < f32::EPSILON { return self.min; }
        let t = ((px - self.px_start) / len) as f64;
        self.min + t * (self.max - self.min)
    }
}
