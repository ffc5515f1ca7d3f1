//! Page navigation state machine.
//!
//! Three pages, one mutable coordinate, no hidden globals: [`apply`] consumes
//! a [`Session`] and an event and returns the successor session plus an
//! optional analysis request. Events are processed strictly one at a time.

use crate::models::{Coordinate, Page, Session};

/// One user action delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Home page button: switch to the interactive map.
    OpenMap,
    /// Home page button: switch to manual coordinate entry.
    OpenCoordinates,
    /// Back button on the map and coordinates pages.
    GoHome,
    /// Raw map widget click payload. Untrusted; malformed payloads are
    /// dropped without mutating the session.
    MapClick { latitude: f64, longitude: f64 },
    /// Manual coordinate entry, already validated at the input boundary.
    SetCoordinate(Coordinate),
    /// Run the risk analysis for the current coordinate. Mutates neither
    /// page nor coordinate.
    Analyze,
}

/// Request to assess the session's current coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRequest {
    pub coordinate: Coordinate,
}

/// Apply one event to a session.
///
/// Transitions outside the defined set (an event for a page that does not
/// offer it) are no-ops, matching a frontend that only renders the actions
/// valid for the current page.
pub fn apply(session: Session, event: &UiEvent) -> (Session, Option<AnalysisRequest>) {
    let mut session = session;
    match (session.page, event) {
        (Page::Home, UiEvent::OpenMap) => {
            session.page = Page::Map;
        }
        (Page::Home, UiEvent::OpenCoordinates) => {
            session.page = Page::Coordinates;
        }
        (Page::Map | Page::Coordinates, UiEvent::GoHome) => {
            session.page = Page::Home;
        }
        (Page::Map, UiEvent::MapClick {
            latitude,
            longitude,
        }) => {
            // Self-loop: a valid click updates the coordinate and stays on
            // the map; an invalid payload is ignored.
            if let Ok(coordinate) = Coordinate::new(*latitude, *longitude) {
                session.coordinate = coordinate;
            }
        }
        (Page::Coordinates, UiEvent::SetCoordinate(coordinate)) => {
            session.coordinate = *coordinate;
        }
        (Page::Map | Page::Coordinates, UiEvent::Analyze) => {
            let request = AnalysisRequest {
                coordinate: session.coordinate,
            };
            return (session, Some(request));
        }
        _ => {}
    }
    (session, None)
}
