//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The report and session types are re-exported from the domain model since
//! they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing domain types that are already serializable
pub use crate::models::{
    CoastalAssessment, Coordinate, OverallAssessment, Page, RiskBand, RiskReport, Session,
    Signal, TideAssessment,
};
pub use crate::store::{ModelAvailability, ModelInfo};

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Which model signals are live
    pub models: ModelAvailability,
}

/// Response listing the loaded model artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub models: Vec<ModelInfo>,
    pub total: usize,
}

/// View of one session returned by the session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    pub page: Page,
    pub coordinate: Coordinate,
}

impl SessionView {
    pub fn new(session_id: impl Into<String>, session: Session) -> Self {
        Self {
            session_id: session_id.into(),
            page: session.page,
            coordinate: session.coordinate,
        }
    }
}

/// One user action posted to the events endpoint.
///
/// Coordinate payloads arrive as raw floats: manual entry is validated at
/// this boundary and rejected with `INVALID_COORDINATE`, while map clicks
/// pass through untrusted and are ignored by the state machine if malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    OpenMap,
    OpenCoordinates,
    GoHome,
    MapClick { latitude: f64, longitude: f64 },
    SetCoordinate { latitude: f64, longitude: f64 },
    Analyze,
}

/// Response to a posted event: the new session view and, for an analyze
/// action, the resulting report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub session: SessionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RiskReport>,
}

/// Request body for the one-shot assessment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessRequest {
    pub latitude: f64,
    pub longitude: f64,
}
