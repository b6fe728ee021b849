pub mod csv;
pub mod manual;

use serde::Serialize;
use thiserror::Error;

pub use csv::{CsvIngest, ingest_csv};
pub use manual::ingest_manual;

/// Fatal ingestion failures. Surfaced to the caller verbatim; the pipeline
/// never substitutes a fallback row or probability for any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("input is empty")]
    EmptyInput,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("no valid rows after parsing")]
    NoValidRows,
    #[error("row {row} does not match the schema: {reason}")]
    RowSchemaMismatch { row: usize, reason: String },
}

/// One rejected data row. `row` is the 0-based index among data rows; the
/// header line, if any, is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub reason: String,
}
