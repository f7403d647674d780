use crate::artifacts::ArtifactPaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_bootstrap_encoders() -> bool {
    true
}

/// Runtime settings. Every field has a default, so an empty JSON object is a
/// valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub artifacts: ArtifactPaths,

    /// Write default encoders when the encoder artifact is missing.
    #[serde(default = "default_bootstrap_encoders")]
    pub bootstrap_encoders: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactPaths::default(),
            bootstrap_encoders: default_bootstrap_encoders(),
        }
    }
}

/// Values given on the command line; each `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub artifacts_dir: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub scaler: Option<PathBuf>,
    pub encoders: Option<PathBuf>,
    pub no_bootstrap: bool,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// `artifacts_dir` replaces all three paths first; single-file overrides
    /// are applied on top of it.
    pub fn apply(mut self, o: ConfigOverrides) -> Self {
        if let Some(dir) = o.artifacts_dir {
            self.artifacts = ArtifactPaths::in_dir(dir);
        }
        if let Some(model) = o.model {
            self.artifacts.model = model;
        }
        if let Some(scaler) = o.scaler {
            self.artifacts.scaler = scaler;
        }
        if let Some(encoders) = o.encoders {
            self.artifacts.encoders = encoders;
        }
        if o.no_bootstrap {
            self.bootstrap_encoders = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_object_is_the_default() {
        let c: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, AppConfig::default());
        assert!(c.bootstrap_encoders);
        assert_eq!(c.artifacts.model, PathBuf::from("model_svm.json"));
    }

    #[test]
    fn reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sdpredict.json");
        fs::write(
            &path,
            r#"{
                "artifacts": {"model": "m.json", "scaler": "s.json", "encoders": "e.json"},
                "bootstrap_encoders": false
            }"#,
        )
        .unwrap();
        let c = AppConfig::from_file(&path).unwrap();
        assert_eq!(c.artifacts.scaler, PathBuf::from("s.json"));
        assert!(!c.bootstrap_encoders);
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = AppConfig::from_file("/nonexistent/sdpredict.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sdpredict.json"));
    }

    #[test]
    fn overrides_layer_dir_then_files() {
        let c = AppConfig::default().apply(ConfigOverrides {
            artifacts_dir: Some("assets".into()),
            encoders: Some("/tmp/enc.json".into()),
            no_bootstrap: true,
            ..ConfigOverrides::default()
        });
        assert_eq!(c.artifacts.model, PathBuf::from("assets/model_svm.json"));
        assert_eq!(c.artifacts.scaler, PathBuf::from("assets/scaler.json"));
        assert_eq!(c.artifacts.encoders, PathBuf::from("/tmp/enc.json"));
        assert!(!c.bootstrap_encoders);
    }
}
