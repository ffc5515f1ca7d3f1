//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for navigation and risk evaluation.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::models::Coordinate;
use crate::services::UiEvent;
use crate::store::ModelAvailability;

use super::dto::{
    AssessRequest, EventRequest, EventResponse, HealthResponse, ModelListResponse, RiskReport,
    SessionView,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting per-model availability.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let models = match &state.assessor {
        Some(assessor) => assessor.availability(),
        None => ModelAvailability {
            tide: false,
            coastal: false,
        },
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        models,
    }))
}

// =============================================================================
// Models
// =============================================================================

/// GET /v1/models
///
/// List the loaded model artifacts with their fingerprints.
pub async fn list_models(State(state): State<AppState>) -> HandlerResult<ModelListResponse> {
    let assessor = state.assessor()?;
    let models = assessor.model_info().to_vec();
    let total = models.len();

    Ok(Json(ModelListResponse { models, total }))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Create a new session on the home page with the default coordinate.
pub async fn create_session(State(state): State<AppState>) -> HandlerResult<SessionView> {
    // Session creation is blocked too when no model is available; the
    // frontend renders the explanatory card instead of the home page.
    state.assessor()?;

    let (session_id, session) = state.sessions.create();
    tracing::debug!("created session {}", session_id);
    Ok(Json(SessionView::new(session_id, session)))
}

/// GET /v1/sessions/{session_id}
///
/// Current page and coordinate of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionView> {
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("session {} not found", session_id)))?;

    Ok(Json(SessionView::new(session_id, session)))
}

/// POST /v1/sessions/{session_id}/events
///
/// Apply one user action to a session. An analyze action additionally runs
/// the risk assessment for the session's current coordinate.
pub async fn post_event(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<EventRequest>,
) -> HandlerResult<EventResponse> {
    let assessor = state.assessor()?.clone();
    let event = into_ui_event(request)?;

    let outcome = state.sessions.update(&session_id, |session| {
        let (next, report) = assessor.handle(*session, &event);
        *session = next;
        (next, report)
    });

    match outcome {
        Some((session, report)) => Ok(Json(EventResponse {
            session: SessionView::new(session_id, session),
            report,
        })),
        None => Err(AppError::NotFound(format!(
            "session {} not found",
            session_id
        ))),
    }
}

/// Translate a wire event into a domain event, validating manual coordinate
/// entry at this boundary.
fn into_ui_event(request: EventRequest) -> Result<UiEvent, AppError> {
    let event = match request {
        EventRequest::OpenMap => UiEvent::OpenMap,
        EventRequest::OpenCoordinates => UiEvent::OpenCoordinates,
        EventRequest::GoHome => UiEvent::GoHome,
        EventRequest::MapClick {
            latitude,
            longitude,
        } => UiEvent::MapClick {
            latitude,
            longitude,
        },
        EventRequest::SetCoordinate {
            latitude,
            longitude,
        } => UiEvent::SetCoordinate(Coordinate::new(latitude, longitude)?),
        EventRequest::Analyze => UiEvent::Analyze,
    };
    Ok(event)
}

// =============================================================================
// One-shot Assessment
// =============================================================================

/// POST /v1/assess
///
/// Stateless risk assessment for a coordinate, without session plumbing.
pub async fn assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> HandlerResult<RiskReport> {
    let assessor = state.assessor()?;
    let coordinate = Coordinate::new(request.latitude, request.longitude)?;

    tracing::debug!("assessing {}", coordinate);
    Ok(Json(assessor.assess(coordinate)))
}
