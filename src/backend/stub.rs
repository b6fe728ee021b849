//! Fixed-output in-process backend for tests and wiring checks.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::{BackendError, InferenceBackend};

/// Returns a canned raw output and records every feature vector it is run
/// with, so tests can assert what reached the backend (and that nothing did
/// after a fatal ingestion error).
pub struct StubBackend {
    output: Vec<f64>,
    input_width: Option<usize>,
    require_init: bool,
    initialized: AtomicBool,
    seen: Mutex<Vec<Vec<f64>>>,
}

impl StubBackend {
    pub fn returning(output: Vec<f64>) -> Self {
        StubBackend {
            output,
            input_width: None,
            require_init: false,
            initialized: AtomicBool::new(false),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_input_width(mut self, width: usize) -> Self {
        self.input_width = Some(width);
        self
    }

    /// Make `run` fail with `NotInitialized` unless `initialize` was called
    /// first, for backends that cannot self-acquire a session.
    pub fn require_initialize(mut self) -> Self {
        self.require_init = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen_features(&self) -> Vec<Vec<f64>> {
        self.seen.lock().unwrap().clone()
    }
}

impl InferenceBackend for StubBackend {
    fn initialize(&self) -> Result<(), BackendError> {
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn expected_input_width(&self) -> Option<usize> {
        self.input_width
    }

    fn run(&self, features: &[f64]) -> Result<Vec<f64>, BackendError> {
        if self.require_init && !self.initialized.load(Ordering::SeqCst) {
            return Err(BackendError::NotInitialized);
        }
        self.seen.lock().unwrap().push(features.to_vec());
        Ok(self.output.clone())
    }
}
