// File: crates/ring-bench/src/lib.rs
// Summary: Ring signature benchmark plot: parse the timing dataset, extract ordered series, chart them.

pub mod dataset;
pub mod error;
pub mod extract;
pub mod plot;

pub use dataset::{parse_dataset, read_dataset, BenchmarkRecord, Dataset};
pub use error::{Error, RenderError, Result, SchemaViolation};
pub use extract::{extract, SeriesTriple, MILLIS_PER_SECOND};
pub use plot::{build_chart, figure_options, render, DisplaySurface, Frame, RasterSurface};

/// Measured generation/verification timings (ms) for ring sizes 1..=1901, step 100.
pub const SAMPLE_DATASET: &str = include_str!("../data/benchmark.json");

/// Run the whole pipeline on `payload` and show the result on `surface`.
/// Nothing is shown when parsing fails.
pub fn plot_benchmark<S: DisplaySurface + ?Sized>(payload: &str, surface: &mut S) -> Result<()> {
    let dataset = parse_dataset(payload)?;
    let triple = extract(&dataset);
    render(&triple, surface)
}
