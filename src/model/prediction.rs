use serde::Serialize;

/// Discrete confidence bucket derived from the calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    /// High iff p >= 0.8, Medium iff 0.5 <= p < 0.8, Low otherwise.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            ConfidenceLabel::High
        } else if probability >= 0.5 {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLabel::Low => "Low",
            ConfidenceLabel::Medium => "Medium",
            ConfidenceLabel::High => "High",
        }
    }
}

/// Calibrated verdict for one candidate, handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub probability: f64,
    pub label: ConfidenceLabel,
    pub is_positive: bool,
}

impl Prediction {
    /// Invariant: `is_positive` uses strict `> 0.5`, so a candidate sitting
    /// exactly on the decision boundary is reported negative.
    pub fn from_probability(probability: f64) -> Self {
        Prediction {
            probability,
            label: ConfidenceLabel::from_probability(probability),
            is_positive: probability > 0.5,
        }
    }
}
