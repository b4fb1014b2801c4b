// File: crates/ring-bench/src/dataset.rs
// Summary: Parses the benchmark JSON payload into typed records.
//
// Payload shape:
//   { "<ring size>": { "generation": <ms>, "verification": <ms> }, ... }

use std::collections::HashSet;
use std::io::Read;
use std::num::IntErrorKind;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result, SchemaViolation};

pub const GENERATION_FIELD: &str = "generation";
pub const VERIFICATION_FIELD: &str = "verification";

/// One measurement: both timings for a single ring size, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkRecord {
    pub size: i64,
    pub generation_ms: f64,
    pub verification_ms: f64,
}

/// Parsed record set. Sizes are unique; order is whatever the payload yielded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

impl Dataset {
    pub fn records(&self) -> &[BenchmarkRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> { self.records.iter() }

    /// Look up a record by ring size. Linear scan; the pipeline itself never
    /// needs random access, this is for callers inspecting a parsed payload.
    pub fn get(&self, size: i64) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|r| r.size == size)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// Parse a complete payload held in memory.
pub fn parse_dataset(payload: &str) -> Result<Dataset> {
    let value: Value = serde_json::from_str(payload).map_err(Error::MalformedInput)?;
    dataset_from_value(&value)
}

/// Parse a payload from a reader. Read failures surface as `MalformedInput`.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let value: Value = serde_json::from_reader(reader).map_err(Error::MalformedInput)?;
    dataset_from_value(&value)
}

fn dataset_from_value(value: &Value) -> Result<Dataset> {
    let entries = value
        .as_object()
        .ok_or_else(|| Error::schema(None, SchemaViolation::NotAMapping))?;

    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        let record = parse_record(key, entry)?;
        // "1" and "01" are distinct JSON keys but the same ring size
        if !seen.insert(record.size) {
            return Err(Error::schema(Some(key.as_str()), SchemaViolation::DuplicateSize(record.size)));
        }
        records.push(record);
    }

    debug!(records = records.len(), "parsed benchmark dataset");
    Ok(Dataset { records })
}

fn parse_record(key: &str, entry: &Value) -> Result<BenchmarkRecord> {
    let size = key.parse::<i64>().map_err(|e| {
        let violation = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SchemaViolation::KeyOutOfRange,
            _ => SchemaViolation::InvalidKey,
        };
        Error::schema(Some(key), violation)
    })?;
    let fields = entry
        .as_object()
        .ok_or_else(|| Error::schema(Some(key), SchemaViolation::EntryNotAnObject))?;

    let millis = |name: &'static str| -> Result<f64> {
        let raw = fields
            .get(name)
            .ok_or_else(|| Error::schema(Some(key), SchemaViolation::MissingField(name)))?;
        // `1e400` is valid JSON; it arrives here as text and fails to become a finite f64
        let ms = raw
            .as_f64()
            .filter(|ms| ms.is_finite())
            .ok_or_else(|| Error::schema(Some(key), SchemaViolation::NotANumber(name)))?;
        if ms < 0.0 {
            return Err(Error::schema(Some(key), SchemaViolation::Negative(name)));
        }
        Ok(ms)
    };

    Ok(BenchmarkRecord {
        size,
        generation_ms: millis(GENERATION_FIELD)?,
        verification_ms: millis(VERIFICATION_FIELD)?,
    })
}
