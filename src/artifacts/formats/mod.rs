mod classifier_artifact;
mod scaler_artifact;

pub use classifier_artifact::*;
pub use scaler_artifact::*;
