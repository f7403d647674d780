use super::{ensure_finite, ensure_same_len};
use crate::artifacts::formats::{
    ClassifierArtifact, ClassifierKind, LogisticRegressionParams, SvcParams,
};
use crate::artifacts::{ArtifactError, ArtifactKind};
use crate::classifiers::{CalibratedSvc, Kernel, KernelSvc, LogisticRegression};
use crate::prediction::Predictor;
use log::debug;

const KIND: ArtifactKind = ArtifactKind::Model;

/// Validates the classifier artifact and picks the predictor variant from
/// what the fitted model can report.
pub fn build_predictor(artifact: ClassifierArtifact) -> Result<Predictor, ArtifactError> {
    let kind = ClassifierKind::from(&artifact);
    let predictor = match artifact {
        ClassifierArtifact::Svc(p) => {
            let platt = p.probability;
            let svc = KernelSvc::try_from(p)?;
            match platt {
                Some(platt) => {
                    if !(platt.a.is_finite() && platt.b.is_finite()) {
                        return Err(ArtifactError::invalid(
                            KIND,
                            "probability parameters are not finite",
                        ));
                    }
                    Predictor::Probabilistic(Box::new(CalibratedSvc::new(svc, platt)))
                }
                None => Predictor::Margin(Box::new(svc)),
            }
        }
        ClassifierArtifact::LogisticRegression(p) => {
            Predictor::Probabilistic(Box::new(LogisticRegression::try_from(p)?))
        }
    };
    debug!(
        "built {kind} predictor over {} features (probabilistic: {})",
        predictor.n_features(),
        predictor.is_probabilistic()
    );
    Ok(predictor)
}

fn validate_kernel(kernel: &Kernel) -> Result<(), ArtifactError> {
    if let Some(gamma) = kernel.gamma() {
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(ArtifactError::invalid(
                KIND,
                format!("kernel gamma must be positive, got {gamma}"),
            ));
        }
    }
    match *kernel {
        Kernel::Poly { coef0, .. } | Kernel::Sigmoid { coef0, .. } if !coef0.is_finite() => {
            Err(ArtifactError::invalid(KIND, "kernel coef0 is not finite"))
        }
        _ => Ok(()),
    }
}

impl TryFrom<SvcParams> for KernelSvc {
    type Error = ArtifactError;

    fn try_from(p: SvcParams) -> Result<Self, Self::Error> {
        validate_kernel(&p.kernel)?;
        let Some(first) = p.support_vectors.first() else {
            return Err(ArtifactError::invalid(KIND, "no support vectors"));
        };
        let n_features = first.len();
        if n_features == 0 {
            return Err(ArtifactError::invalid(KIND, "support vectors are empty"));
        }
        ensure_same_len(
            KIND,
            ("dual_coef", p.dual_coef.len()),
            ("support_vectors", p.support_vectors.len()),
        )?;
        for (i, sv) in p.support_vectors.iter().enumerate() {
            if sv.len() != n_features {
                return Err(ArtifactError::invalid(
                    KIND,
                    format!(
                        "support_vectors[{i}] has {} features, expected {n_features}",
                        sv.len()
                    ),
                ));
            }
            ensure_finite(KIND, &format!("support_vectors[{i}]"), sv)?;
        }
        ensure_finite(KIND, "dual_coef", &p.dual_coef)?;
        ensure_finite(KIND, "intercept", &[p.intercept])?;

        Ok(KernelSvc::new(
            p.kernel,
            p.support_vectors,
            p.dual_coef,
            p.intercept,
            n_features,
        ))
    }
}

impl TryFrom<LogisticRegressionParams> for LogisticRegression {
    type Error = ArtifactError;

    fn try_from(p: LogisticRegressionParams) -> Result<Self, Self::Error> {
        if p.coef.is_empty() {
            return Err(ArtifactError::invalid(KIND, "coef is empty"));
        }
        ensure_finite(KIND, "coef", &p.coef)?;
        ensure_finite(KIND, "intercept", &[p.intercept])?;
        Ok(LogisticRegression::new(p.coef, p.intercept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::PlattScaling;

    fn svc_params(probability: Option<PlattScaling>) -> SvcParams {
        SvcParams {
            kernel: Kernel::Rbf { gamma: 0.5 },
            support_vectors: vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            dual_coef: vec![-1.0, 1.0],
            intercept: 0.0,
            probability,
        }
    }

    fn invalid_reason(r: Result<Predictor, ArtifactError>) -> String {
        match r {
            Err(ArtifactError::Invalid { reason, .. }) => reason,
            Err(other) => panic!("expected Invalid, got {other:?}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn probability_block_selects_probabilistic_variant() {
        let p = build_predictor(ClassifierArtifact::Svc(svc_params(Some(PlattScaling {
            a: -1.5,
            b: 0.0,
        }))))
        .unwrap();
        assert!(p.is_probabilistic());
        assert_eq!(p.n_features(), 2);

        let p = build_predictor(ClassifierArtifact::Svc(svc_params(None))).unwrap();
        assert!(matches!(p, Predictor::Margin(_)));
    }

    #[test]
    fn logistic_regression_is_probabilistic() {
        let p = build_predictor(ClassifierArtifact::LogisticRegression(
            LogisticRegressionParams {
                coef: vec![0.1; 10],
                intercept: 0.0,
            },
        ))
        .unwrap();
        assert!(p.is_probabilistic());
        assert_eq!(p.n_features(), 10);
    }

    #[test]
    fn ragged_support_vectors_are_invalid() {
        let mut params = svc_params(None);
        params.support_vectors[1].push(2.0);
        let reason = invalid_reason(build_predictor(ClassifierArtifact::Svc(params)));
        assert_eq!(reason, "support_vectors[1] has 3 features, expected 2");
    }

    #[test]
    fn dual_coef_count_must_match() {
        let mut params = svc_params(None);
        params.dual_coef.pop();
        let reason = invalid_reason(build_predictor(ClassifierArtifact::Svc(params)));
        assert!(reason.starts_with("dual_coef has 1 entries"), "{reason}");
    }

    #[test]
    fn non_positive_gamma_is_invalid() {
        let mut params = svc_params(None);
        params.kernel = Kernel::Rbf { gamma: 0.0 };
        let reason = invalid_reason(build_predictor(ClassifierArtifact::Svc(params)));
        assert!(reason.contains("gamma"));
    }

    #[test]
    fn empty_models_are_invalid() {
        let mut params = svc_params(None);
        params.support_vectors.clear();
        params.dual_coef.clear();
        assert_eq!(
            invalid_reason(build_predictor(ClassifierArtifact::Svc(params))),
            "no support vectors"
        );
        assert_eq!(
            invalid_reason(build_predictor(ClassifierArtifact::LogisticRegression(
                LogisticRegressionParams {
                    coef: vec![],
                    intercept: 0.0
                }
            ))),
            "coef is empty"
        );
    }

    #[test]
    fn infinite_platt_parameters_are_invalid() {
        let params = svc_params(Some(PlattScaling {
            a: f64::INFINITY,
            b: 0.0,
        }));
        assert!(invalid_reason(build_predictor(ClassifierArtifact::Svc(params))).contains("probability"));
    }
}
