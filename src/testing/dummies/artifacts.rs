use crate::artifacts::build::{build_predictor, build_scaler};
use crate::artifacts::formats::{
    ClassifierArtifact, LogisticRegressionParams, ScalerArtifact, StandardScalerParams, SvcParams,
};
use crate::artifacts::{ArtifactPaths, LoadedArtifacts};
use crate::classifiers::{Kernel, PlattScaling};
use crate::core::FEATURE_COUNT;
use crate::preprocessing::EncoderSet;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn demo_scaler_artifact() -> ScalerArtifact {
    ScalerArtifact::Standard(StandardScalerParams {
        mean: vec![500.5, 23.0, 0.5, 2.0, 3.0, 6.5, 5.0, 3.0, 5.0, 5.0],
        scale: vec![288.7, 3.5, 0.5, 1.4, 0.5, 1.5, 2.5, 1.7, 3.0, 3.0],
    })
}

/// Small RBF SVC over standardized features. Risk support vectors sit at
/// short sleep, long social media time and high stress.
pub fn demo_svc_params(probability: Option<PlattScaling>) -> SvcParams {
    SvcParams {
        kernel: Kernel::Rbf { gamma: 0.1 },
        support_vectors: vec![
            vec![0.0, 0.0, 0.0, 0.0, -0.5, -1.5, 0.5, 1.2, -1.0, 1.5],
            vec![0.0, 0.0, 0.0, 0.0, 0.5, 0.8, 0.0, -0.6, 0.8, -1.2],
            vec![0.0, -0.5, 0.0, 0.0, -1.0, -1.0, 1.0, 0.8, -0.5, 1.0],
            vec![0.0, 0.5, 0.0, 0.0, 0.8, 0.5, -0.5, -1.0, 1.0, -0.8],
        ],
        dual_coef: vec![1.0, -1.0, 0.6, -0.6],
        intercept: -0.05,
        probability,
    }
}

pub fn demo_model_artifact() -> ClassifierArtifact {
    ClassifierArtifact::Svc(demo_svc_params(Some(PlattScaling { a: -2.1, b: 0.1 })))
}

fn assemble(model: ClassifierArtifact, scaler: ScalerArtifact) -> LoadedArtifacts {
    LoadedArtifacts::new(
        EncoderSet::bootstrap(),
        build_scaler(scaler).expect("demo scaler is valid"),
        build_predictor(model).expect("demo model is valid"),
    )
}

/// Calibrated SVC, standard scaler, bootstrap encoders.
pub fn demo_artifacts() -> LoadedArtifacts {
    assemble(demo_model_artifact(), demo_scaler_artifact())
}

/// Same SVC without probability estimates.
pub fn margin_artifacts() -> LoadedArtifacts {
    assemble(ClassifierArtifact::Svc(demo_svc_params(None)), demo_scaler_artifact())
}

/// Logistic model whose only non-zero weight is on stress (mean 5, scale 2):
/// `f = 0.8 · (stress - 5) / 2 - 0.2`.
pub fn stress_only_artifacts() -> LoadedArtifacts {
    let mut mean = vec![0.0; FEATURE_COUNT];
    let mut scale = vec![1.0; FEATURE_COUNT];
    mean[FEATURE_COUNT - 1] = 5.0;
    scale[FEATURE_COUNT - 1] = 2.0;
    let mut coef = vec![0.0; FEATURE_COUNT];
    coef[FEATURE_COUNT - 1] = 0.8;

    assemble(
        ClassifierArtifact::LogisticRegression(LogisticRegressionParams {
            coef,
            intercept: -0.2,
        }),
        ScalerArtifact::Standard(StandardScalerParams { mean, scale }),
    )
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) {
    let text = serde_json::to_string_pretty(value).expect("serializable");
    fs::write(path, text).expect("writable test path");
}

/// Writes the demo model and scaler into `dir`; the encoder file is left
/// absent so loading exercises the bootstrap path.
pub fn write_demo_artifacts(dir: &Path) -> ArtifactPaths {
    let paths = ArtifactPaths::in_dir(dir);
    write_json(&paths.model, &demo_model_artifact());
    write_json(&paths.scaler, &demo_scaler_artifact());
    paths
}
