//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::RiskAssessor;

use super::error::AppError;
use super::sessions::SessionRegistry;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Assessor built at startup. `None` when both model artifacts were
    /// missing: the server then serves the blocking unavailable state on
    /// every interaction endpoint.
    pub assessor: Option<Arc<RiskAssessor>>,
    /// In-memory session registry.
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Create a new application state.
    pub fn new(assessor: Option<Arc<RiskAssessor>>) -> Self {
        Self {
            assessor,
            sessions: SessionRegistry::new(),
        }
    }

    /// The assessor, or the blocking models-unavailable error.
    pub fn assessor(&self) -> Result<&Arc<RiskAssessor>, AppError> {
        self.assessor.as_ref().ok_or(AppError::ModelsUnavailable)
    }
}
