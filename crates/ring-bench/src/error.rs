// File: crates/ring-bench/src/error.rs
// Summary: Error taxonomy for the parse -> extract -> plot pipeline.

use chart_core::ChartError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not syntactically valid JSON (or could not be read).
    #[error("malformed benchmark payload: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// Valid JSON that does not match the benchmark record schema.
    #[error("schema violation{}: {violation}", key_suffix(.key))]
    Schema {
        key: Option<String>,
        violation: SchemaViolation,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("display surface failed: {0}")]
    Display(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn schema(key: Option<&str>, violation: SchemaViolation) -> Self {
        Self::Schema { key: key.map(str::to_owned), violation }
    }

    /// Wrap a failure of the surface the chart is shown on.
    pub fn display(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Display(err.into())
    }
}

impl From<ChartError> for Error {
    fn from(err: ChartError) -> Self {
        Self::Render(RenderError::Chart(err))
    }
}

fn key_suffix(key: &Option<String>) -> String {
    key.as_deref().map(|k| format!(" at key {k:?}")).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("top-level value is not a mapping")]
    NotAMapping,
    #[error("key is not an integer ring size")]
    InvalidKey,
    #[error("ring size key does not fit in a signed 64-bit integer")]
    KeyOutOfRange,
    #[error("entry is not an object")]
    EntryNotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` is not a finite number")]
    NotANumber(&'static str),
    #[error("field `{0}` is negative")]
    Negative(&'static str),
    #[error("ring size {0} appears more than once")]
    DuplicateSize(i64),
}

/// Defects between extracted series and the renderer, plus backend failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("series length mismatch: {sizes} sizes, {generation} generation, {verification} verification")]
    LengthMismatch {
        sizes: usize,
        generation: usize,
        verification: usize,
    },
    #[error(transparent)]
    Chart(#[from] ChartError),
}
