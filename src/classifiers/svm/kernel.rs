use crate::utils::math::{dot, squared_euclidean};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: u32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    pub fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Kernel::Linear => dot(a, b),
            Kernel::Rbf { gamma } => libm::exp(-gamma * squared_euclidean(a, b)),
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => libm::pow(gamma * dot(a, b) + coef0, degree as f64),
            Kernel::Sigmoid { gamma, coef0 } => libm::tanh(gamma * dot(a, b) + coef0),
        }
    }

    pub fn gamma(&self) -> Option<f64> {
        match *self {
            Kernel::Linear => None,
            Kernel::Rbf { gamma } | Kernel::Poly { gamma, .. } | Kernel::Sigmoid { gamma, .. } => {
                Some(gamma)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rbf_is_one_on_identical_points() {
        let k = Kernel::Rbf { gamma: 0.5 };
        assert!((k.evaluate(&[1.0, 2.0], &[1.0, 2.0]) - 1.0).abs() < 1e-12);
        let far = k.evaluate(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((far - libm::exp(-12.5)).abs() < 1e-15);
    }

    #[test]
    fn poly_and_sigmoid_values() {
        let p = Kernel::Poly {
            gamma: 1.0,
            coef0: 1.0,
            degree: 2,
        };
        assert_eq!(p.evaluate(&[1.0, 1.0], &[1.0, 2.0]), 16.0);

        let s = Kernel::Sigmoid {
            gamma: 1.0,
            coef0: 0.0,
        };
        assert_eq!(s.evaluate(&[0.0], &[5.0]), 0.0);
    }

    #[test]
    fn deserializes_from_tagged_json() {
        let k: Kernel = serde_json::from_str(r#"{"type": "rbf", "gamma": 0.1}"#).unwrap();
        assert_eq!(k, Kernel::Rbf { gamma: 0.1 });
        let k: Kernel = serde_json::from_str(r#"{"type": "linear"}"#).unwrap();
        assert_eq!(k.gamma(), None);
    }
}
