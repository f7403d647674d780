pub mod cli;
pub mod presenter;
pub mod types;
