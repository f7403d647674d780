use crate::classifiers::classifier::{MarginClassifier, ProbabilisticClassifier};
use crate::prediction::PredictionError;
use crate::utils::math::{dot, sigmoid};

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coef: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Self {
        Self { coef, intercept }
    }
}

impl MarginClassifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn decision_value(&self, x: &[f64]) -> Result<f64, PredictionError> {
        PredictionError::check_shape("classifier", self.coef.len(), x)?;
        Ok(dot(&self.coef, x) + self.intercept)
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn positive_probability(&self, x: &[f64]) -> Result<f64, PredictionError> {
        Ok(sigmoid(self.decision_value(x)?))
    }
}
