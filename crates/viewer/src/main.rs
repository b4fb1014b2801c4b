// File: crates/viewer/src/main.rs
// Summary: Loads the benchmark payload (file argument or embedded sample) and shows the ring-size chart.

mod window;

use std::borrow::Cow;

use anyhow::{Context, Result};
use ring_bench::SAMPLE_DATASET;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::window::WindowSurface;

fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let payload = load_payload()?;
    let mut surface = WindowSurface::new();
    ring_bench::plot_benchmark(&payload, &mut surface).context("failed to plot benchmark")?;
    Ok(())
}

/// The first argument, if any, is a path to a dataset file.
fn load_payload() -> Result<Cow<'static, str>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("failed to read dataset '{path}'"))?;
            info!(%path, bytes = text.len(), "loaded dataset");
            Ok(Cow::Owned(text))
        }
        None => {
            info!("no dataset path given; using embedded sample");
            Ok(Cow::Borrowed(SAMPLE_DATASET))
        }
    }
}
