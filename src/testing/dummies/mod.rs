mod artifacts;
mod profiles;

pub use artifacts::*;
pub use profiles::random_profiles;
