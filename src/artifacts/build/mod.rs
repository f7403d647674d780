mod classifiers;
mod scalers;

pub use classifiers::build_predictor;
pub use scalers::build_scaler;

use crate::artifacts::{ArtifactError, ArtifactKind};

fn ensure_finite(kind: ArtifactKind, what: &str, values: &[f64]) -> Result<(), ArtifactError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => Err(ArtifactError::invalid(
            kind,
            format!("{what}[{i}] is not finite"),
        )),
    }
}

fn ensure_same_len(
    kind: ArtifactKind,
    (a_name, a): (&str, usize),
    (b_name, b): (&str, usize),
) -> Result<(), ArtifactError> {
    if a == b {
        Ok(())
    } else {
        Err(ArtifactError::invalid(
            kind,
            format!("{a_name} has {a} entries but {b_name} has {b}"),
        ))
    }
}
