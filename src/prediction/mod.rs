mod error;
mod feature_encoder;
mod predictor;
mod session;

pub use error::PredictionError;
pub use feature_encoder::FeatureEncoder;
pub use predictor::{PredictionResult, Predictor, RiskLabel, Score};
pub use session::InferenceSession;
