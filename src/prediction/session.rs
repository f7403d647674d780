use crate::artifacts::LoadedArtifacts;
use crate::core::StudentProfile;
use crate::prediction::{FeatureEncoder, PredictionError, PredictionResult};
use log::debug;
use std::sync::Arc;

/// Read-only handle over the loaded artifacts. Cloning shares the same
/// artifacts.
#[derive(Clone)]
pub struct InferenceSession {
    artifacts: Arc<LoadedArtifacts>,
}

impl InferenceSession {
    pub fn new(artifacts: Arc<LoadedArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &LoadedArtifacts {
        &self.artifacts
    }

    /// validate → encode → scale → classify. Any failure aborts this request
    /// only.
    pub fn predict(&self, profile: &StudentProfile) -> Result<PredictionResult, PredictionError> {
        profile.validate()?;

        let features = FeatureEncoder::new(&self.artifacts.encoders).encode(profile)?;
        debug!("features: {features}");

        let scaled = self.artifacts.scaler.transform(features.as_slice())?;
        debug!("scaled: {scaled:?}");

        let result = self.artifacts.predictor.predict(&scaled)?;
        debug!("result: {} ({:?})", result.label, result.score);
        Ok(result)
    }
}

impl From<LoadedArtifacts> for InferenceSession {
    fn from(artifacts: LoadedArtifacts) -> Self {
        Self::new(Arc::new(artifacts))
    }
}
