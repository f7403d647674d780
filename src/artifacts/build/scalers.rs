use super::{ensure_finite, ensure_same_len};
use crate::artifacts::formats::{MinMaxScalerParams, ScalerArtifact, StandardScalerParams};
use crate::artifacts::{ArtifactError, ArtifactKind};
use crate::preprocessing::{MinMaxScaler, Scaler, StandardScaler};

const KIND: ArtifactKind = ArtifactKind::Scaler;

pub fn build_scaler(artifact: ScalerArtifact) -> Result<Box<dyn Scaler>, ArtifactError> {
    match artifact {
        ScalerArtifact::Standard(p) => Ok(Box::new(StandardScaler::try_from(p)?)),
        ScalerArtifact::MinMax(p) => Ok(Box::new(MinMaxScaler::try_from(p)?)),
    }
}

impl TryFrom<StandardScalerParams> for StandardScaler {
    type Error = ArtifactError;

    fn try_from(p: StandardScalerParams) -> Result<Self, Self::Error> {
        if p.mean.is_empty() {
            return Err(ArtifactError::invalid(KIND, "mean is empty"));
        }
        ensure_same_len(KIND, ("mean", p.mean.len()), ("scale", p.scale.len()))?;
        ensure_finite(KIND, "mean", &p.mean)?;
        ensure_finite(KIND, "scale", &p.scale)?;
        if let Some(i) = p.scale.iter().position(|s| *s < 0.0) {
            return Err(ArtifactError::invalid(KIND, format!("scale[{i}] is negative")));
        }
        Ok(StandardScaler::new(p.mean, p.scale))
    }
}

impl TryFrom<MinMaxScalerParams> for MinMaxScaler {
    type Error = ArtifactError;

    fn try_from(p: MinMaxScalerParams) -> Result<Self, Self::Error> {
        if p.data_min.is_empty() {
            return Err(ArtifactError::invalid(KIND, "data_min is empty"));
        }
        ensure_same_len(
            KIND,
            ("data_min", p.data_min.len()),
            ("data_max", p.data_max.len()),
        )?;
        ensure_finite(KIND, "data_min", &p.data_min)?;
        ensure_finite(KIND, "data_max", &p.data_max)?;
        if let Some(i) = p
            .data_min
            .iter()
            .zip(&p.data_max)
            .position(|(lo, hi)| hi < lo)
        {
            return Err(ArtifactError::invalid(
                KIND,
                format!("data_max[{i}] is below data_min[{i}]"),
            ));
        }
        let (lo, hi) = p.feature_range;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ArtifactError::invalid(
                KIND,
                format!("feature_range ({lo}, {hi}) is not increasing"),
            ));
        }
        Ok(MinMaxScaler::new(p.data_min, p.data_max, p.feature_range))
    }
}
