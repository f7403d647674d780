use crate::artifacts::build::{build_predictor, build_scaler};
use crate::artifacts::formats::{ClassifierArtifact, ScalerArtifact};
use crate::artifacts::{ArtifactError, ArtifactKind};
use crate::core::FEATURE_COUNT;
use crate::prediction::Predictor;
use crate::preprocessing::{EncoderSet, Scaler};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Locations of the three artifact files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub encoders: PathBuf,
}

impl ArtifactPaths {
    pub const MODEL_FILE: &'static str = "model_svm.json";
    pub const SCALER_FILE: &'static str = "scaler.json";
    pub const ENCODERS_FILE: &'static str = "encoder.json";

    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(Self::MODEL_FILE),
            scaler: dir.join(Self::SCALER_FILE),
            encoders: dir.join(Self::ENCODERS_FILE),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir("")
    }
}

/// Everything a prediction needs, loaded once and never mutated.
pub struct LoadedArtifacts {
    pub encoders: EncoderSet,
    pub scaler: Box<dyn Scaler>,
    pub predictor: Predictor,
}

impl LoadedArtifacts {
    pub fn new(encoders: EncoderSet, scaler: Box<dyn Scaler>, predictor: Predictor) -> Self {
        let artifacts = Self {
            encoders,
            scaler,
            predictor,
        };
        artifacts.warn_on_width_drift();
        artifacts
    }

    /// Width drift is not fatal here: every prediction will fail with a
    /// shape mismatch instead, which the user sees per request.
    fn warn_on_width_drift(&self) {
        let scaler = self.scaler.n_features();
        let model = self.predictor.n_features();
        if scaler != FEATURE_COUNT {
            warn!("scaler expects {scaler} features, the form produces {FEATURE_COUNT}");
        }
        if model != scaler {
            warn!("classifier expects {model} features, scaler produces {scaler}");
        }
    }
}

/// Loads model and scaler (both required) and the encoders, writing the
/// default encoders first when `bootstrap_encoders` is set and the file does
/// not exist yet.
pub fn load_artifacts(
    paths: &ArtifactPaths,
    bootstrap_encoders: bool,
) -> Result<LoadedArtifacts, ArtifactError> {
    let model: ClassifierArtifact = read_json(ArtifactKind::Model, &paths.model)?;
    let predictor = build_predictor(model)?;

    let scaler: ScalerArtifact = read_json(ArtifactKind::Scaler, &paths.scaler)?;
    let scaler = build_scaler(scaler)?;

    let encoders = load_encoders(&paths.encoders, bootstrap_encoders)?;

    info!(
        "loaded artifacts: model={}, scaler={}, encoders={} ({})",
        paths.model.display(),
        paths.scaler.display(),
        paths.encoders.display(),
        encoders.fields().collect::<Vec<_>>().join(", ")
    );
    Ok(LoadedArtifacts::new(encoders, scaler, predictor))
}

pub fn load_encoders(path: &Path, bootstrap: bool) -> Result<EncoderSet, ArtifactError> {
    if path.exists() {
        let set: EncoderSet = read_json(ArtifactKind::Encoders, path)?;
        if let Some(field) = set.first_malformed() {
            return Err(ArtifactError::invalid(
                ArtifactKind::Encoders,
                format!("classes of '{field}' are empty or not sorted"),
            ));
        }
        return Ok(set);
    }
    if !bootstrap {
        return Err(ArtifactError::Missing {
            kind: ArtifactKind::Encoders,
            path: path.to_path_buf(),
        });
    }

    let set = EncoderSet::bootstrap();
    persist_encoders(path, &set)?;
    warn!(
        "no encoder artifact at {}; wrote default encoders",
        path.display()
    );
    Ok(set)
}

/// Writes the encoders through a temporary file in the target directory so a
/// crash never leaves a truncated artifact behind.
pub fn persist_encoders(path: &Path, set: &EncoderSet) -> Result<(), ArtifactError> {
    let bootstrap_err = |source: std::io::Error| ArtifactError::Bootstrap {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(bootstrap_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(bootstrap_err)?;
    serde_json::to_writer_pretty(&mut tmp, set).map_err(|e| bootstrap_err(e.into()))?;
    tmp.write_all(b"\n").map_err(bootstrap_err)?;
    tmp.persist(path).map_err(|e| bootstrap_err(e.error))?;

    info!("persisted encoders to {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(kind: ArtifactKind, path: &Path) -> Result<T, ArtifactError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ArtifactError::Missing {
                kind,
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ArtifactError::Io {
                kind,
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
