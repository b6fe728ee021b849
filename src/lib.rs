//! Feature-ingestion and probability-calibration pipeline for exoplanet
//! transit-candidate (KOI) classification.
//!
//! Raw tabular input (a CSV upload or a manually entered record) is parsed
//! against the fixed 17-column KOI schema, aligned to the inference
//! backend's input width, run through the backend, and the raw output is
//! calibrated to one probability in [0,1] with a Low/Medium/High label.
//! Every stage fails closed with a typed error; the probability is a pure
//! function of the backend output.

pub mod backend;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod trace;

pub use backend::{BackendError, HttpBackend, InferenceBackend, StubBackend};
pub use input::{CsvIngest, IngestError, RowError, ingest_csv, ingest_manual};
pub use model::prediction::{ConfidenceLabel, Prediction};
pub use model::schema::{FIELD_COUNT, FIELDS, SAMPLE_CANDIDATE};
pub use pipeline::{
    AlignmentWarning, BatchPrediction, PredictError, align, calibrate, predict_csv,
    predict_manual, predict_vector,
};
