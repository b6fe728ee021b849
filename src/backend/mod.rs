pub mod http;
pub mod stub;

use thiserror::Error;

pub use http::HttpBackend;
pub use stub::StubBackend;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend session is not initialized")]
    NotInitialized,
    #[error("backend transport failure: {0}")]
    TransportFailure(String),
    #[error("backend returned malformed output: {0}")]
    MalformedOutput(String),
}

/// Inference capability consumed by the pipeline.
///
/// The pipeline receives a backend as an externally-owned handle and never
/// constructs or caches one itself. `run` is the pipeline's only blocking
/// operation; everything around it is pure computation.
pub trait InferenceBackend {
    /// Acquire the backend session. Idempotent: callers may invoke this any
    /// number of times and concurrent callers must not end up with duplicate
    /// sessions.
    fn initialize(&self) -> Result<(), BackendError>;

    /// The input width the model expects, when the backend can introspect
    /// its own shape metadata. `None` means the backend is assumed to match
    /// the 17-column schema as-is.
    fn expected_input_width(&self) -> Option<usize> {
        None
    }

    /// Execute inference on an aligned feature vector. The returned raw
    /// output is length 1, 2, or N; its numeric convention is not declared
    /// here and is inferred by the calibrator.
    fn run(&self, features: &[f64]) -> Result<Vec<f64>, BackendError>;
}
