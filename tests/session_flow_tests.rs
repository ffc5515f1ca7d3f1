//! End-to-end flows over the public API: navigation, assessment, and the
//! blocked state when no model is available.

use std::sync::Arc;

use coastrisk::models::{Coordinate, Page, RiskBand, Session};
use coastrisk::services::{RiskAssessor, UiEvent};
use coastrisk::store::{CoastalModel, ModelError, ModelSet, StoreError, TideModel};

struct FixedTide(f64);
impl TideModel for FixedTide {
    fn predict(&self, _coordinate: &Coordinate) -> Result<f64, ModelError> {
        Ok(self.0)
    }
}

struct FixedCoastal(&'static str);
impl CoastalModel for FixedCoastal {
    fn predict(&self, _coordinate: &Coordinate) -> Result<String, ModelError> {
        Ok(self.0.to_string())
    }
}

struct FailingCoastal;
impl CoastalModel for FailingCoastal {
    fn predict(&self, _coordinate: &Coordinate) -> Result<String, ModelError> {
        Err(ModelError::Invocation("corrupt artifact state".to_string()))
    }
}

fn full_assessor(tide: f64, label: &'static str) -> RiskAssessor {
    RiskAssessor::new(ModelSet::with_models(
        Some(Arc::new(FixedTide(tide))),
        Some(Arc::new(FixedCoastal(label))),
    ))
    .unwrap()
}

#[test]
fn test_both_models_absent_blocks_the_session() {
    // No assessor can exist without models, so no report can be produced.
    let result = RiskAssessor::new(ModelSet::with_models(None, None));
    assert!(matches!(result, Err(StoreError::BothModelsMissing)));
}

#[test]
fn test_tide_only_end_to_end() {
    let assessor = RiskAssessor::new(ModelSet::with_models(
        Some(Arc::new(FixedTide(2.6))),
        None,
    ))
    .unwrap();

    let report = assessor.assess(Coordinate::default());
    let tide = report.tide.as_ready().expect("tide should be ready");
    assert_eq!(tide.score, 2.6);
    assert_eq!(tide.band, RiskBand::High);
    assert!(!report.coastal.is_ready());
    assert!(report.overall.is_none());
}

#[test]
fn test_map_selection_flow() {
    let assessor = full_assessor(1.8, "Low");
    let session = Session::default();

    let (session, report) = assessor.handle(session, &UiEvent::OpenMap);
    assert_eq!(session.page, Page::Map);
    assert!(report.is_none());

    let (session, report) = assessor.handle(
        session,
        &UiEvent::MapClick {
            latitude: 50.8225,
            longitude: -0.1372,
        },
    );
    assert_eq!(session.page, Page::Map);
    assert_eq!(session.coordinate.latitude(), 50.8225);
    assert!(report.is_none());

    let (session, report) = assessor.handle(session, &UiEvent::Analyze);
    let report = report.expect("analyze should produce a report");
    assert_eq!(report.coordinate, session.coordinate);
    assert_eq!(report.overall.as_ref().unwrap().band, RiskBand::Moderate);
    assert_eq!(
        report.overall.as_ref().unwrap().advisory,
        "Exercise extreme caution near coastal areas"
    );

    // Analyze left the session untouched.
    assert_eq!(session.page, Page::Map);
    assert_eq!(session.coordinate.latitude(), 50.8225);
}

#[test]
fn test_manual_entry_flow() {
    let assessor = full_assessor(0.4, "High");
    let session = Session::default();

    let (session, _) = assessor.handle(session, &UiEvent::OpenCoordinates);
    assert_eq!(session.page, Page::Coordinates);

    let target = Coordinate::new(-33.8688, 151.2093).unwrap();
    let (session, _) = assessor.handle(session, &UiEvent::SetCoordinate(target));
    assert_eq!(session.coordinate, target);

    let (_, report) = assessor.handle(session, &UiEvent::Analyze);
    let report = report.unwrap();
    // Coastal High dominates a calm tide score.
    assert_eq!(report.overall.unwrap().band, RiskBand::High);
}

#[test]
fn test_navigation_round_trip_keeps_coordinate() {
    let assessor = full_assessor(1.0, "Low");
    let start = Session::default();

    let (session, _) = assessor.handle(start, &UiEvent::OpenCoordinates);
    let (session, _) = assessor.handle(session, &UiEvent::GoHome);
    assert_eq!(session, start);
}

#[test]
fn test_one_failing_model_still_reports_the_other() {
    let assessor = RiskAssessor::new(ModelSet::with_models(
        Some(Arc::new(FixedTide(0.9))),
        Some(Arc::new(FailingCoastal)),
    ))
    .unwrap();

    let report = assessor.assess(Coordinate::default());
    let tide = report.tide.as_ready().unwrap();
    assert_eq!(tide.band, RiskBand::Low);

    match &report.coastal {
        coastrisk::models::Signal::Unavailable { reason } => {
            assert!(reason.contains("corrupt artifact state"));
        }
        other => panic!("coastal should be unavailable, got {:?}", other),
    }
    assert!(report.overall.is_none());
}
