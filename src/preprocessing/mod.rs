mod encoders;
mod scalers;

pub use encoders::{CategoricalEncoder, DEPARTMENT_FIELD, EncoderSet, GENDER_FIELD};
pub use scalers::{MinMaxScaler, Scaler, StandardScaler};
