// File: crates/chart-core/src/series.rs
// Summary: Labelled XY line series with an optional point marker.

use skia_safe as skia;

/// Glyph drawn at every data point of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    /// Filled disc.
    Circle,
    /// Diagonal "x".
    Cross,
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
    /// Explicit stroke color; `None` takes the theme palette color by series index.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new(), marker: Marker::None, color: None }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, marker: Marker::None, color: None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// `(x_min, x_max, y_min, y_max)` over finite points, or `None` when there are none.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(x_min, x_max, y_min, y_max), &(x, y)| {
            (x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y))
        }))
    }
}
