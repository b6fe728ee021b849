use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::backend::InferenceBackend;
use crate::input::{self, RowError};
use crate::model::prediction::Prediction;
use crate::pipeline::PredictError;
use crate::pipeline::align::align;
use crate::pipeline::calibrate::calibrate;

/// Batch outcome for a CSV upload: one prediction per accepted row, plus the
/// rejection record for every row that failed ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchPrediction {
    pub predictions: Vec<Prediction>,
    pub rejected: Vec<RowError>,
}

/// Run one already-ingested feature vector through align -> infer ->
/// calibrate. Initialization is idempotent, so calling it per request is
/// free after the first acquisition.
pub fn predict_vector(
    backend: &dyn InferenceBackend,
    features: Vec<f64>,
) -> Result<Prediction, PredictError> {
    backend.initialize()?;
    let (aligned, _) = align(features, backend.expected_input_width());
    let raw = backend.run(&aligned)?;
    let probability = calibrate(&raw)?;
    Ok(Prediction::from_probability(probability))
}

/// Predict from a manually entered record. Ingestion failures abort before
/// the backend is touched.
pub fn predict_manual(
    backend: &dyn InferenceBackend,
    fields: &HashMap<String, String>,
) -> Result<Prediction, PredictError> {
    let features = input::ingest_manual(fields)?;
    predict_vector(backend, features)
}

/// Predict every accepted row of a CSV upload, carrying per-row rejections
/// through to the caller.
pub fn predict_csv(
    backend: &dyn InferenceBackend,
    text: &str,
) -> Result<BatchPrediction, PredictError> {
    let ingest = input::ingest_csv(text)?;
    let mut predictions = Vec::with_capacity(ingest.vectors.len());
    for features in ingest.vectors {
        predictions.push(predict_vector(backend, features)?);
    }
    info!("predicted {} candidate(s)", predictions.len());
    Ok(BatchPrediction {
        predictions,
        rejected: ingest.rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StubBackend;
    use crate::input::IngestError;
    use crate::model::prediction::ConfidenceLabel;
    use crate::model::schema::{FIELDS, SAMPLE_CANDIDATE};

    fn sample_fields() -> HashMap<String, String> {
        FIELDS
            .iter()
            .zip(SAMPLE_CANDIDATE)
            .map(|(f, v)| (f.name.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_vector_flows_through_to_a_labelled_prediction() {
        let backend = StubBackend::returning(vec![0.3, 0.7]);
        let p = predict_vector(&backend, SAMPLE_CANDIDATE.to_vec()).unwrap();
        assert_eq!(p.probability, 0.7);
        assert_eq!(p.label, ConfidenceLabel::Medium);
        assert!(p.is_positive);
    }

    #[test]
    fn test_backend_sees_padded_vector() {
        let backend = StubBackend::returning(vec![0.9]).with_input_width(20);
        predict_vector(&backend, SAMPLE_CANDIDATE.to_vec()).unwrap();
        let seen = backend.seen_features();
        assert_eq!(seen[0].len(), 20);
        assert_eq!(&seen[0][17..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_manual_flag_out_of_range_aborts_before_backend() {
        let backend = StubBackend::returning(vec![0.9]);
        let mut fields = sample_fields();
        fields.insert("koi_fpflag_nt".to_string(), "2".to_string());

        let err = predict_manual(&backend, &fields).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Ingest(IngestError::RowSchemaMismatch { row: 0, .. })
        ));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_csv_batch_predicts_each_accepted_row() {
        let backend = StubBackend::returning(vec![2.0]);
        let row: Vec<String> = SAMPLE_CANDIDATE.iter().map(f64::to_string).collect();
        let row = row.join(",");
        let text = format!("{row}\n{row}\n");

        let batch = predict_csv(&backend, &text).unwrap();
        assert_eq!(batch.predictions.len(), 2);
        assert!(batch.rejected.is_empty());
        assert_eq!(backend.calls(), 2);
        // Deterministic: both rows calibrate identically.
        assert_eq!(batch.predictions[0], batch.predictions[1]);
    }
}
