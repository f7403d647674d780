pub mod build;
mod error;
pub mod formats;
mod store;

pub use error::{ArtifactError, ArtifactKind};
pub use store::{ArtifactPaths, LoadedArtifacts, load_artifacts, load_encoders, persist_encoders};
