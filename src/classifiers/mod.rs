pub mod classifier;
mod logistic_regression;
pub mod svm;

pub use classifier::{MarginClassifier, ProbabilisticClassifier};
pub use logistic_regression::LogisticRegression;
pub use svm::{CalibratedSvc, Kernel, KernelSvc, PlattScaling};
