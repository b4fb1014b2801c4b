// File: crates/ring-bench/src/extract.rs
// Summary: Projects records into three index-aligned sequences, ordered by ring size, in seconds.

use crate::dataset::{BenchmarkRecord, Dataset};

/// Source timings are milliseconds; the chart shows seconds.
pub const MILLIS_PER_SECOND: f64 = 1000.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesTriple {
    /// Strictly ascending ring sizes.
    pub sizes: Vec<i64>,
    pub generation_seconds: Vec<f64>,
    pub verification_seconds: Vec<f64>,
}

impl SeriesTriple {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            sizes: Vec::with_capacity(n),
            generation_seconds: Vec::with_capacity(n),
            verification_seconds: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize { self.sizes.len() }

    pub fn is_empty(&self) -> bool { self.sizes.is_empty() }

    /// All three sequences have the same length.
    pub fn is_aligned(&self) -> bool {
        self.generation_seconds.len() == self.sizes.len()
            && self.verification_seconds.len() == self.sizes.len()
    }

    pub fn generation_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.sizes, &self.generation_seconds)
    }

    pub fn verification_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.sizes, &self.verification_seconds)
    }

    fn push(&mut self, record: &BenchmarkRecord) {
        self.sizes.push(record.size);
        self.generation_seconds.push(record.generation_ms / MILLIS_PER_SECOND);
        self.verification_seconds.push(record.verification_ms / MILLIS_PER_SECOND);
    }
}

fn zip_points(xs: &[i64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().zip(ys).map(|(&x, &y)| (x as f64, y)).collect()
}

/// Sort by ring size and convert both timings to seconds.
pub fn extract(dataset: &Dataset) -> SeriesTriple {
    let mut records: Vec<&BenchmarkRecord> = dataset.iter().collect();
    records.sort_by_key(|r| r.size);

    let mut triple = SeriesTriple::with_capacity(records.len());
    for record in records {
        triple.push(record);
    }
    triple
}
