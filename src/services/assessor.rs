//! Assessment orchestration over the loaded model set.

use crate::models::{Coordinate, RiskReport, Session, Signal};
use crate::store::{
    ModelAvailability, ModelInfo, ModelSet, StoreError, StoreResult, COASTAL_MODEL_NAME,
    TIDE_MODEL_NAME,
};

use super::evaluator;
use super::navigation::{self, UiEvent};

/// Invokes the available models for a coordinate and evaluates the results.
///
/// Construction requires at least one model: with both artifacts missing the
/// application has nothing to assess and interaction is blocked for the whole
/// session.
pub struct RiskAssessor {
    models: ModelSet,
}

impl RiskAssessor {
    /// Wrap a loaded model set.
    ///
    /// # Errors
    /// Returns [`StoreError::BothModelsMissing`] when the set is empty.
    pub fn new(models: ModelSet) -> StoreResult<Self> {
        models.require_available()?;
        Ok(Self { models })
    }

    /// Which model signals are live.
    pub fn availability(&self) -> ModelAvailability {
        self.models.availability()
    }

    /// Metadata of the loaded artifacts.
    pub fn model_info(&self) -> &[ModelInfo] {
        self.models.info()
    }

    /// Run both models for a coordinate and build the report.
    ///
    /// A failing invocation degrades its own signal only; the error message
    /// is carried in the report for display. Partial reports are produced
    /// whenever at least one signal succeeds.
    pub fn assess(&self, coordinate: Coordinate) -> RiskReport {
        let tide = match self.models.tide() {
            Some(model) => match model.predict(&coordinate) {
                Ok(score) => Signal::Ready(score),
                Err(err) => {
                    log::warn!("tide prediction failed for {}: {}", coordinate, err);
                    Signal::unavailable(err.to_string())
                }
            },
            None => Signal::unavailable(format!("{} model is not loaded", TIDE_MODEL_NAME)),
        };

        let coastal = match self.models.coastal() {
            Some(model) => match model.predict(&coordinate) {
                Ok(label) => Signal::Ready(label),
                Err(err) => {
                    log::warn!("coastal prediction failed for {}: {}", coordinate, err);
                    Signal::unavailable(err.to_string())
                }
            },
            None => Signal::unavailable(format!("{} model is not loaded", COASTAL_MODEL_NAME)),
        };

        evaluator::evaluate(coordinate, tide, coastal)
    }

    /// Event dispatch: navigate, and resolve an analysis request when the
    /// event asked for one.
    pub fn handle(&self, session: Session, event: &UiEvent) -> (Session, Option<RiskReport>) {
        let (session, request) = navigation::apply(session, event);
        let report = request.map(|req| self.assess(req.coordinate));
        (session, report)
    }
}
