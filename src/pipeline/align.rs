use thiserror::Error;
use tracing::warn;

/// Non-fatal alignment adjustments. Truncation and padding silently change
/// what each feature position means to the model, so they are always logged
/// and handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlignmentWarning {
    #[error("feature vector truncated from {from} to {to} entries")]
    Truncated { from: usize, to: usize },
    #[error("feature vector padded from {from} to {to} entries with zeros")]
    Padded { from: usize, to: usize },
}

/// Adapt a schema-length feature vector to the backend's declared input
/// width. `None` means the backend exposes no shape metadata and is assumed
/// to match the schema. No scaling or normalization happens here.
pub fn align(mut features: Vec<f64>, width: Option<usize>) -> (Vec<f64>, Option<AlignmentWarning>) {
    let from = features.len();
    let warning = match width {
        None => None,
        Some(w) if w == from => None,
        Some(w) if w < from => {
            features.truncate(w);
            Some(AlignmentWarning::Truncated { from, to: w })
        }
        Some(w) => {
            features.resize(w, 0.0);
            Some(AlignmentWarning::Padded { from, to: w })
        }
    };
    if let Some(warning) = warning {
        warn!("{warning}");
    }
    (features, warning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seventeen() -> Vec<f64> {
        (0..17).map(|i| i as f64).collect()
    }

    #[test]
    fn test_unknown_width_passes_through() {
        let (out, warning) = align(seventeen(), None);
        assert_eq!(out, seventeen());
        assert_eq!(warning, None);
    }

    #[test]
    fn test_matching_width_passes_through() {
        let (out, warning) = align(seventeen(), Some(17));
        assert_eq!(out, seventeen());
        assert_eq!(warning, None);
    }

    #[test]
    fn test_narrow_backend_truncates() {
        let (out, warning) = align(seventeen(), Some(10));
        assert_eq!(out, (0..10).map(|i| i as f64).collect::<Vec<_>>());
        assert_eq!(warning, Some(AlignmentWarning::Truncated { from: 17, to: 10 }));
    }

    #[test]
    fn test_wide_backend_pads_with_zeros() {
        let (out, warning) = align(seventeen(), Some(20));
        assert_eq!(out.len(), 20);
        assert_eq!(&out[..17], &seventeen()[..]);
        assert_eq!(&out[17..], &[0.0, 0.0, 0.0]);
        assert_eq!(warning, Some(AlignmentWarning::Padded { from: 17, to: 20 }));
    }
}
