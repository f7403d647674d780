pub mod artifacts;
pub mod classifiers;
pub mod config;
pub mod core;
pub mod prediction;
pub mod preprocessing;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
