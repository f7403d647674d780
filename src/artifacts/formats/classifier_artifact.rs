use crate::classifiers::{Kernel, PlattScaling};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvcParams {
    pub kernel: Kernel,
    pub support_vectors: Vec<Vec<f64>>,
    /// One coefficient per support vector (`y_i · α_i`).
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
    /// Present when the model was fitted with probability estimates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<PlattScaling>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionParams {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

/// On-disk form of the classifier artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ClassifierKind))]
#[strum_discriminants(derive(Display, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ClassifierArtifact {
    Svc(SvcParams),
    LogisticRegression(LogisticRegressionParams),
}
