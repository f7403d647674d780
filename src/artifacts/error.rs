use std::path::PathBuf;
use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Scaler,
    Encoders,
}

/// Startup failures while reading or writing the artifact files.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("{kind} artifact not found at {}", .path.display())]
    Missing { kind: ArtifactKind, path: PathBuf },

    #[error("failed to read {kind} artifact at {}: {source}", .path.display())]
    Io {
        kind: ArtifactKind,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {kind} artifact at {}: {source}", .path.display())]
    Parse {
        kind: ArtifactKind,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid {kind} artifact: {reason}")]
    Invalid { kind: ArtifactKind, reason: String },

    #[error("failed to write default encoders to {}: {source}", .path.display())]
    Bootstrap {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ArtifactError {
    pub(crate) fn invalid<R: Into<String>>(kind: ArtifactKind, reason: R) -> Self {
        ArtifactError::Invalid {
            kind,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> Option<ArtifactKind> {
        match self {
            ArtifactError::Missing { kind, .. }
            | ArtifactError::Io { kind, .. }
            | ArtifactError::Parse { kind, .. }
            | ArtifactError::Invalid { kind, .. } => Some(*kind),
            ArtifactError::Bootstrap { .. } => Some(ArtifactKind::Encoders),
        }
    }
}
