//! Raw-output calibration.
//!
//! The backend does not declare whether its output is a bounded score, a
//! logit, a class-probability pair, or a multi-class logit vector. The
//! distinguishing signal is purely numeric (value ranges and row-sum
//! proximity to 1), so this is a tagged decision procedure over the output
//! length, not polymorphism over model types.

use thiserror::Error;

/// Two class probabilities must sum to 1 within this tolerance to be taken
/// as already-calibrated rather than as a pair of logits.
const PAIR_SUM_TOLERANCE: f64 = 1e-3;

/// Index of the positive class in two-or-more-class outputs, by convention.
const POSITIVE_CLASS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalibrationError {
    #[error("calibrated probability is not finite")]
    NonFiniteResult,
    #[error("unrecognized raw output shape: length {0}")]
    UnrecognizedOutputShape(usize),
}

/// Reduce a raw backend output to one probability in [0,1].
///
/// Deterministic: the same raw output always calibrates to the same
/// probability. A non-finite result is an error, never replaced by a fixed
/// or randomized fallback.
pub fn calibrate(raw: &[f64]) -> Result<f64, CalibrationError> {
    let probability = match raw {
        [] => return Err(CalibrationError::UnrecognizedOutputShape(0)),
        [v] => {
            if (0.0..=1.0).contains(v) {
                *v
            } else {
                logistic(*v)
            }
        }
        [a, b] => {
            let bounded = (0.0..=1.0).contains(a) && (0.0..=1.0).contains(b);
            if bounded && ((a + b) - 1.0).abs() < PAIR_SUM_TOLERANCE {
                *b
            } else {
                softmax(raw)[POSITIVE_CLASS]
            }
        }
        _ => softmax(raw)[POSITIVE_CLASS],
    };

    if !probability.is_finite() {
        return Err(CalibrationError::NonFiniteResult);
    }
    Ok(probability.clamp(0.0, 1.0))
}

fn logistic(v: f64) -> f64 {
    1.0 / (1.0 + (-v).exp())
}

/// Softmax with max-subtraction so large logits cannot overflow `exp`.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
