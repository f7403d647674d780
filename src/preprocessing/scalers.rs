use crate::prediction::PredictionError;

/// Fitted column-wise transform applied before classification.
pub trait Scaler: Send + Sync {
    fn n_features(&self) -> usize;

    fn transform(&self, x: &[f64]) -> Result<Vec<f64>, PredictionError>;
}

/// Zero-variance columns are left unscaled instead of dividing by zero.
#[inline]
fn handle_zero(scale: f64) -> f64 {
    if scale == 0.0 { 1.0 } else { scale }
}

/// Standardization: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// `mean` and `scale` must have the same length; the artifact builder
    /// checks this before calling.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        let scale = scale.into_iter().map(handle_zero).collect();
        Self { mean, scale }
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, x: &[f64]) -> Result<Vec<f64>, PredictionError> {
        PredictionError::check_shape("scaler", self.n_features(), x)?;
        Ok(x.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(v, (m, s))| (v - m) / s)
            .collect())
    }
}

/// Rescales each column from its fitted `[data_min, data_max]` onto
/// `feature_range`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    data_min: Vec<f64>,
    span: Vec<f64>,
    feature_range: (f64, f64),
}

impl MinMaxScaler {
    pub fn new(data_min: Vec<f64>, data_max: Vec<f64>, feature_range: (f64, f64)) -> Self {
        let span = data_min
            .iter()
            .zip(&data_max)
            .map(|(lo, hi)| handle_zero(hi - lo))
            .collect();
        Self {
            data_min,
            span,
            feature_range,
        }
    }
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.data_min.len()
    }

    fn transform(&self, x: &[f64]) -> Result<Vec<f64>, PredictionError> {
        PredictionError::check_shape("scaler", self.n_features(), x)?;
        let (lo, hi) = self.feature_range;
        Ok(x.iter()
            .zip(self.data_min.iter().zip(&self.span))
            .map(|(v, (min, span))| (v - min) / span * (hi - lo) + lo)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn standard_scaler_centers_and_scales() {
        let s = StandardScaler::new(vec![1.0, 10.0], vec![2.0, 5.0]);
        let out = s.transform(&[3.0, 0.0]).unwrap();
        assert!(close(&out, &[1.0, -2.0]), "{out:?}");
    }

    #[test]
    fn standard_scaler_zero_scale_only_centers() {
        let s = StandardScaler::new(vec![4.0], vec![0.0]);
        assert_eq!(s.transform(&[6.0]).unwrap(), vec![2.0]);
    }

    #[test]
    fn min_max_scaler_maps_bounds_onto_range() {
        let s = MinMaxScaler::new(vec![0.0, 16.0], vec![4.0, 40.0], (0.0, 1.0));
        assert!(close(&s.transform(&[0.0, 16.0]).unwrap(), &[0.0, 0.0]));
        assert!(close(&s.transform(&[4.0, 40.0]).unwrap(), &[1.0, 1.0]));
        assert!(close(&s.transform(&[2.0, 28.0]).unwrap(), &[0.5, 0.5]));
    }

    #[test]
    fn min_max_scaler_custom_range() {
        let s = MinMaxScaler::new(vec![0.0], vec![10.0], (-1.0, 1.0));
        assert!(close(&s.transform(&[5.0]).unwrap(), &[0.0]));
        assert!(close(&s.transform(&[10.0]).unwrap(), &[1.0]));
    }

    #[test]
    fn wrong_width_is_a_shape_mismatch() {
        let s = StandardScaler::new(vec![0.0; 10], vec![1.0; 10]);
        assert_eq!(
            s.transform(&[1.0; 9]),
            Err(PredictionError::ShapeMismatch {
                stage: "scaler",
                expected: 10,
                actual: 9
            })
        );
    }
}
