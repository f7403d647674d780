use thiserror::Error;

/// Failure of a single prediction request. None of these are fatal to the
/// process; the user adjusts the inputs and tries again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("unseen {field} category '{label}' (fitted: {})", .known.join(", "))]
    UnseenCategory {
        field: String,
        label: String,
        known: Vec<String>,
    },

    #[error("shape mismatch at {stage}: expected {expected} features, got {actual}")]
    ShapeMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("no encoder fitted for field '{0}'")]
    MissingEncoder(String),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl PredictionError {
    pub(crate) fn check_shape(
        stage: &'static str,
        expected: usize,
        x: &[f64],
    ) -> Result<(), PredictionError> {
        if x.len() == expected {
            Ok(())
        } else {
            Err(PredictionError::ShapeMismatch {
                stage,
                expected,
                actual: x.len(),
            })
        }
    }
}
