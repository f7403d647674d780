use crate::classifiers::classifier::{MarginClassifier, ProbabilisticClassifier};
use crate::classifiers::svm::Kernel;
use crate::prediction::PredictionError;
use crate::utils::math::sigmoid;
use serde::{Deserialize, Serialize};

/// Support vector classifier evaluated from its fitted dual form:
/// `f(x) = Σ dual_coef_i · K(sv_i, x) + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelSvc {
    kernel: Kernel,
    support_vectors: Vec<Vec<f64>>,
    dual_coef: Vec<f64>,
    intercept: f64,
    n_features: usize,
}

impl KernelSvc {
    /// Dimensions are validated by the artifact builder; every support
    /// vector must have `n_features` entries.
    pub fn new(
        kernel: Kernel,
        support_vectors: Vec<Vec<f64>>,
        dual_coef: Vec<f64>,
        intercept: f64,
        n_features: usize,
    ) -> Self {
        Self {
            kernel,
            support_vectors,
            dual_coef,
            intercept,
            n_features,
        }
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn n_support(&self) -> usize {
        self.support_vectors.len()
    }
}

impl MarginClassifier for KernelSvc {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn decision_value(&self, x: &[f64]) -> Result<f64, PredictionError> {
        PredictionError::check_shape("classifier", self.n_features, x)?;
        let sum: f64 = self
            .support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(sv, alpha)| alpha * self.kernel.evaluate(sv, x))
            .sum();
        Ok(sum + self.intercept)
    }
}

/// Platt sigmoid fitted on decision values:
/// `P(risk | f) = 1 / (1 + exp(a·f + b))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlattScaling {
    pub a: f64,
    pub b: f64,
}

impl PlattScaling {
    pub fn probability(&self, decision: f64) -> f64 {
        sigmoid(-(self.a * decision + self.b))
    }
}

/// SVC trained with probability estimates enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedSvc {
    svc: KernelSvc,
    platt: PlattScaling,
}

impl CalibratedSvc {
    pub fn new(svc: KernelSvc, platt: PlattScaling) -> Self {
        Self { svc, platt }
    }
}

impl MarginClassifier for CalibratedSvc {
    fn n_features(&self) -> usize {
        self.svc.n_features()
    }

    fn decision_value(&self, x: &[f64]) -> Result<f64, PredictionError> {
        self.svc.decision_value(x)
    }
}

impl ProbabilisticClassifier for CalibratedSvc {
    fn positive_probability(&self, x: &[f64]) -> Result<f64, PredictionError> {
        let f = self.svc.decision_value(x)?;
        Ok(self.platt.probability(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_svc() -> KernelSvc {
        KernelSvc::new(
            Kernel::Linear,
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![2.0, -1.0],
            0.5,
            2,
        )
    }

    #[test]
    fn linear_decision_value() {
        // 2·(x·e1) - (x·e2) + 0.5
        let svc = linear_svc();
        assert_eq!(svc.decision_value(&[1.0, 1.0]).unwrap(), 1.5);
        assert_eq!(svc.decision_value(&[0.0, 3.0]).unwrap(), -2.5);
        assert_eq!(svc.n_support(), 2);
    }

    #[test]
    fn rbf_decision_value_at_support_vector() {
        let svc = KernelSvc::new(
            Kernel::Rbf { gamma: 1.0 },
            vec![vec![0.0]],
            vec![1.0],
            -0.25,
            1,
        );
        assert!((svc.decision_value(&[0.0]).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rejects_wrong_width() {
        assert!(matches!(
            linear_svc().decision_value(&[1.0, 2.0, 3.0]),
            Err(PredictionError::ShapeMismatch {
                stage: "classifier",
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn platt_with_negative_slope_is_increasing() {
        let platt = PlattScaling { a: -2.0, b: 0.0 };
        assert!((platt.probability(0.0) - 0.5).abs() < 1e-12);
        assert!(platt.probability(1.0) > 0.5);
        assert!(platt.probability(-1.0) < 0.5);
    }

    #[test]
    fn calibrated_probability_stays_in_unit_interval() {
        let model = CalibratedSvc::new(linear_svc(), PlattScaling { a: -3.0, b: 0.1 });
        for x in [[100.0, 0.0], [0.0, 100.0], [0.0, 0.0], [-50.0, 20.0]] {
            let p = model.positive_probability(&x).unwrap();
            assert!((0.0..=1.0).contains(&p), "p={p} for {x:?}");
        }
    }
}
