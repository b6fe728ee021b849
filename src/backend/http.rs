//! HTTP JSON inference backend.
//!
//! Posts `{"features": [...]}` to a remote model endpoint and decodes the
//! response into a raw output vector. The response may carry a full tensor
//! (`outputs`) or a single bounded score (`probability` / `prediction`);
//! anything else is malformed, never silently defaulted.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::backend::{BackendError, InferenceBackend};

/// The hosted model endpoint the presentation layer points at by default.
pub const DEFAULT_ENDPOINT: &str = "https://exolumin-ml-backend.onrender.com/predict";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpBackend {
    endpoint: String,
    timeout: Duration,
    input_width: Option<usize>,
    client: OnceLock<reqwest::blocking::Client>,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a [f64],
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpBackend {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
            input_width: None,
            client: OnceLock::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Declare the model's input width when it is known out of band. The
    /// remote endpoint itself advertises no shape metadata.
    pub fn with_input_width(mut self, width: usize) -> Self {
        self.input_width = Some(width);
        self
    }

    /// Create-if-absent session acquisition. The client is built at most
    /// once per backend value; concurrent callers race only on which built
    /// client gets kept, never on duplicate live sessions.
    fn client(&self) -> Result<&reqwest::blocking::Client, BackendError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let built = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| BackendError::TransportFailure(e.to_string()))?;
        Ok(self.client.get_or_init(|| built))
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        HttpBackend::new(DEFAULT_ENDPOINT)
    }
}

impl InferenceBackend for HttpBackend {
    fn initialize(&self) -> Result<(), BackendError> {
        self.client().map(|_| ())
    }

    fn expected_input_width(&self) -> Option<usize> {
        self.input_width
    }

    fn run(&self, features: &[f64]) -> Result<Vec<f64>, BackendError> {
        let client = self.client()?;

        info!("posting {} feature(s) to {}", features.len(), self.endpoint);
        let resp = client
            .post(&self.endpoint)
            .json(&PredictRequest { features })
            .send()
            .map_err(|e| BackendError::TransportFailure(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::TransportFailure(format!(
                "server returned {status}"
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .map_err(|e| BackendError::MalformedOutput(e.to_string()))?;
        decode_response(&body)
    }
}

fn decode_response(body: &serde_json::Value) -> Result<Vec<f64>, BackendError> {
    if let Some(outputs) = body.get("outputs").and_then(|v| v.as_array()) {
        if outputs.is_empty() {
            return Err(BackendError::MalformedOutput(
                "outputs array is empty".to_string(),
            ));
        }
        let mut raw = Vec::with_capacity(outputs.len());
        for v in outputs {
            raw.push(v.as_f64().ok_or_else(|| {
                BackendError::MalformedOutput("non-numeric entry in outputs".to_string())
            })?);
        }
        return Ok(raw);
    }

    for key in ["probability", "prediction"] {
        if let Some(v) = body.get(key) {
            let score = v.as_f64().ok_or_else(|| {
                BackendError::MalformedOutput(format!("'{key}' is not a number"))
            })?;
            return Ok(vec![score]);
        }
    }

    Err(BackendError::MalformedOutput(
        "response carries neither 'outputs' nor 'probability'".to_string(),
    ))
}
