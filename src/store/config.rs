//! Model store configuration from environment variables or a TOML file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};

/// Location of the model artifacts on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the artifact files.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    /// File name of the tide prediction artifact.
    #[serde(default = "default_tide_artifact")]
    pub tide_artifact: String,
    /// File name of the coastal risk artifact.
    #[serde(default = "default_coastal_artifact")]
    pub coastal_artifact: String,
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_tide_artifact() -> String {
    "tide_prediction.json".to_string()
}

fn default_coastal_artifact() -> String {
    "coastal_risk_model.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            tide_artifact: default_tide_artifact(),
            coastal_artifact: default_coastal_artifact(),
        }
    }
}

/// Wrapper table for the configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    store: StoreConfig,
}

impl StoreConfig {
    /// Create a store configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MODELS_DIR` (optional, default: `models`): Artifact directory
    /// - `TIDE_MODEL_FILE` (optional, default: `tide_prediction.json`)
    /// - `COASTAL_MODEL_FILE` (optional, default: `coastal_risk_model.json`)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var("MODELS_DIR") {
            config.models_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("TIDE_MODEL_FILE") {
            config.tide_artifact = file;
        }
        if let Ok(file) = env::var("COASTAL_MODEL_FILE") {
            config.coastal_artifact = file;
        }
        config
    }

    /// Read a store configuration from a TOML file with a `[store]` table.
    ///
    /// # Errors
    /// Returns [`StoreError::Configuration`] if the file cannot be read or
    /// does not parse.
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Configuration(format!(
                "cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let parsed: ConfigFile = toml::from_str(&content).map_err(|e| {
            StoreError::Configuration(format!(
                "cannot parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(parsed.store)
    }

    /// Resolve configuration: `COASTRISK_CONFIG` points at a TOML file,
    /// otherwise environment variables with defaults apply.
    pub fn resolve() -> StoreResult<Self> {
        if let Ok(path) = env::var("COASTRISK_CONFIG") {
            return Self::from_file(Path::new(&path));
        }
        Ok(Self::from_env())
    }

    /// Full path of the tide prediction artifact.
    pub fn tide_artifact_path(&self) -> PathBuf {
        self.models_dir.join(&self.tide_artifact)
    }

    /// Full path of the coastal risk artifact.
    pub fn coastal_artifact_path(&self) -> PathBuf {
        self.models_dir.join(&self.coastal_artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::default();
        assert_eq!(
            config.tide_artifact_path(),
            PathBuf::from("models/tide_prediction.json")
        );
        assert_eq!(
            config.coastal_artifact_path(),
            PathBuf::from("models/coastal_risk_model.json")
        );
    }

    #[test]
    fn test_parse_config_file_content() {
        let parsed: ConfigFile = toml::from_str(
            r#"
            [store]
            models_dir = "/srv/models"
            tide_artifact = "tide.json"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.store.models_dir, PathBuf::from("/srv/models"));
        assert_eq!(parsed.store.tide_artifact, "tide.json");
        // Missing keys fall back to defaults.
        assert_eq!(parsed.store.coastal_artifact, "coastal_risk_model.json");
    }
}
