use crate::core::{FeatureVector, PLACEHOLDER_ID, StudentProfile};
use crate::preprocessing::{DEPARTMENT_FIELD, EncoderSet, GENDER_FIELD};
use crate::prediction::PredictionError;

/// Turns a profile into the fixed-order feature vector using borrowed
/// encoders.
pub struct FeatureEncoder<'a> {
    encoders: &'a EncoderSet,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(encoders: &'a EncoderSet) -> Self {
        Self { encoders }
    }

    pub fn encode(&self, profile: &StudentProfile) -> Result<FeatureVector, PredictionError> {
        let gender_label: &'static str = profile.gender.into();
        let department_label: &'static str = profile.department.into();
        let gender = self.encoders.encode(GENDER_FIELD, gender_label)?;
        let department = self.encoders.encode(DEPARTMENT_FIELD, department_label)?;

        Ok(FeatureVector::new([
            PLACEHOLDER_ID,
            profile.age as f64,
            gender as f64,
            department as f64,
            profile.gpa,
            profile.sleep_hours,
            profile.study_hours,
            profile.social_hours,
            profile.activity_level as f64,
            profile.stress_level as f64,
        ]))
    }
}
