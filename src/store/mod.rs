//! File-based store for the two pre-trained model artifacts.
//!
//! The store loads the `tide_prediction` and `coastal_risk_model` artifacts
//! once at process start. Either may be absent or unreadable; each artifact
//! degrades independently and the degraded signal is reported to the user
//! instead of failing the load. Only the absence of both models is fatal to
//! interaction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

pub mod artifact;
pub mod checksum;
pub mod config;
pub mod error;

pub use config::StoreConfig;
pub use error::{ModelError, StoreError, StoreResult};

/// Artifact name of the tide prediction model.
pub const TIDE_MODEL_NAME: &str = "tide_prediction";

/// Artifact name of the coastal flood risk model.
pub const COASTAL_MODEL_NAME: &str = "coastal_risk_model";

/// Pre-trained model producing a continuous tide risk score.
///
/// Invocation is synchronous and assumed fast.
pub trait TideModel: Send + Sync {
    fn predict(&self, coordinate: &Coordinate) -> Result<f64, ModelError>;
}

/// Pre-trained model producing a categorical coastal flood risk label.
///
/// The label is an open string at this seam; classification into the closed
/// band set happens in the evaluator.
pub trait CoastalModel: Send + Sync {
    fn predict(&self, coordinate: &Coordinate) -> Result<String, ModelError>;
}

/// Metadata for one loaded artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub kind: String,
    /// SHA-256 of the artifact bytes.
    pub fingerprint: String,
}

/// Which model signals are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAvailability {
    pub tide: bool,
    pub coastal: bool,
}

/// The set of models loaded at process start.
pub struct ModelSet {
    tide: Option<Arc<dyn TideModel>>,
    coastal: Option<Arc<dyn CoastalModel>>,
    info: Vec<ModelInfo>,
}

impl ModelSet {
    /// Load both artifacts from the configured store.
    ///
    /// Each artifact is attempted independently; a missing or malformed
    /// artifact is logged and leaves that signal unavailable. The returned
    /// set may therefore be partial or empty.
    pub fn load(config: &StoreConfig) -> Self {
        let mut info = Vec::new();

        let tide = match artifact::load_tide_model(&config.tide_artifact_path()) {
            Ok((model, meta)) => {
                log::info!("loaded {} ({})", meta.name, meta.fingerprint);
                info.push(meta);
                Some(Arc::new(model) as Arc<dyn TideModel>)
            }
            Err(err) => {
                log::warn!("tide model unavailable: {}", err);
                None
            }
        };

        let coastal = match artifact::load_coastal_model(&config.coastal_artifact_path()) {
            Ok((model, meta)) => {
                log::info!("loaded {} ({})", meta.name, meta.fingerprint);
                info.push(meta);
                Some(Arc::new(model) as Arc<dyn CoastalModel>)
            }
            Err(err) => {
                log::warn!("coastal model unavailable: {}", err);
                None
            }
        };

        Self {
            tide,
            coastal,
            info,
        }
    }

    /// Assemble a set from already constructed models. Used for injecting
    /// stand-ins where file artifacts are not wanted.
    pub fn with_models(
        tide: Option<Arc<dyn TideModel>>,
        coastal: Option<Arc<dyn CoastalModel>>,
    ) -> Self {
        Self {
            tide,
            coastal,
            info: Vec::new(),
        }
    }

    pub fn tide(&self) -> Option<&Arc<dyn TideModel>> {
        self.tide.as_ref()
    }

    pub fn coastal(&self) -> Option<&Arc<dyn CoastalModel>> {
        self.coastal.as_ref()
    }

    pub fn availability(&self) -> ModelAvailability {
        ModelAvailability {
            tide: self.tide.is_some(),
            coastal: self.coastal.is_some(),
        }
    }

    /// Metadata of the artifacts that did load.
    pub fn info(&self) -> &[ModelInfo] {
        &self.info
    }

    /// Fail with [`StoreError::BothModelsMissing`] unless at least one model
    /// is available.
    pub fn require_available(&self) -> StoreResult<()> {
        if self.tide.is_none() && self.coastal.is_none() {
            return Err(StoreError::BothModelsMissing);
        }
        Ok(())
    }
}
