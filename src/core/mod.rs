mod feature_vector;
mod profile;

pub use feature_vector::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, PLACEHOLDER_ID};
pub use profile::*;
