use crate::prediction::PredictionError;

/// A fitted binary classifier exposing its raw decision value.
///
/// Positive values mean the positive ("risk") class.
pub trait MarginClassifier: Send + Sync {
    fn n_features(&self) -> usize;

    fn decision_value(&self, x: &[f64]) -> Result<f64, PredictionError>;
}

/// A classifier that can also report a calibrated probability for the
/// positive class.
pub trait ProbabilisticClassifier: MarginClassifier {
    fn positive_probability(&self, x: &[f64]) -> Result<f64, PredictionError>;
}
