use crate::classifiers::{MarginClassifier, ProbabilisticClassifier};
use crate::prediction::PredictionError;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, StrumDisplay, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskLabel {
    NoRisk,
    Risk,
}

impl RiskLabel {
    /// Positive decision values select the positive class.
    pub fn from_decision(decision: f64) -> Self {
        if decision > 0.0 {
            RiskLabel::Risk
        } else {
            RiskLabel::NoRisk
        }
    }
}

/// Confidence attached to a label. Which variant you get depends on the
/// kind of classifier loaded, never on the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Score {
    /// Probability of the positive class, in `[0, 1]`.
    Probability(f64),
    /// Raw, unbounded decision value.
    Decision(f64),
}

impl Score {
    pub fn value(&self) -> f64 {
        match *self {
            Score::Probability(p) => p,
            Score::Decision(d) => d,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    pub score: Score,
}

/// The loaded classifier, tagged by what it can report.
pub enum Predictor {
    Probabilistic(Box<dyn ProbabilisticClassifier>),
    Margin(Box<dyn MarginClassifier>),
}

impl Predictor {
    pub fn n_features(&self) -> usize {
        match self {
            Predictor::Probabilistic(model) => model.n_features(),
            Predictor::Margin(model) => model.n_features(),
        }
    }

    pub fn is_probabilistic(&self) -> bool {
        matches!(self, Predictor::Probabilistic(_))
    }

    pub fn predict(&self, scaled: &[f64]) -> Result<PredictionResult, PredictionError> {
        match self {
            Predictor::Probabilistic(model) => {
                let decision = model.decision_value(scaled)?;
                let p = model.positive_probability(scaled)?.clamp(0.0, 1.0);
                Ok(PredictionResult {
                    label: RiskLabel::from_decision(decision),
                    score: Score::Probability(p),
                })
            }
            Predictor::Margin(model) => {
                let decision = model.decision_value(scaled)?;
                Ok(PredictionResult {
                    label: RiskLabel::from_decision(decision),
                    score: Score::Decision(decision),
                })
            }
        }
    }
}
