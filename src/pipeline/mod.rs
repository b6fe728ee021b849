pub mod align;
pub mod calibrate;
pub mod predict;

use thiserror::Error;

use crate::backend::BackendError;
use crate::input::IngestError;
use crate::pipeline::calibrate::CalibrationError;

pub use align::{AlignmentWarning, align};
pub use calibrate::calibrate;
pub use predict::{BatchPrediction, predict_csv, predict_manual, predict_vector};

/// Any fatal failure of an end-to-end prediction request. Each stage's error
/// is carried through unchanged; there is no catch-and-guess anywhere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Calibration(#[from] CalibrationError),
}
