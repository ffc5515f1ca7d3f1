//! Error types for the model store.

use std::path::PathBuf;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised while locating, reading, or parsing a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The artifact file does not exist. Degrades that signal only.
    #[error("model artifact not found: {name} at {}", path.display())]
    ModelMissing { name: &'static str, path: PathBuf },

    /// The artifact exists but could not be read.
    #[error("failed to read model artifact {name}: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The artifact bytes are not a valid serialized model.
    #[error("failed to parse model artifact {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact parsed but describes an unusable model.
    #[error("invalid model artifact {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    /// Store or server configuration problem.
    #[error("store configuration error: {0}")]
    Configuration(String),

    /// Neither model artifact could be loaded. This is the single
    /// whole-application fatal condition: no assessment can be produced.
    #[error(
        "no predictive models are available; expected tide_prediction and coastal_risk_model artifacts"
    )]
    BothModelsMissing,
}

/// Error raised by a model's `predict` call.
///
/// Invocation failures degrade that signal only; the message is kept for
/// display alongside the healthy signal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("model produced a non-finite risk score: {0}")]
    InvalidScore(f64),
}
