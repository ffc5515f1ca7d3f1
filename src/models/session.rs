//! Session state for one interactive user context.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// The three pages of the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Map,
    Coordinates,
}

/// Mutable state scoped to one user's continuous interaction.
///
/// A session is an explicitly passed, exclusively owned value: transitions
/// consume it and return the successor. It lives for the duration of the
/// interaction context and is never shared across users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub page: Page,
    pub coordinate: Coordinate,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            page: Page::Home,
            coordinate: Coordinate::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.page, Page::Home);
        assert_eq!(session.coordinate, Coordinate::DUBLIN);
    }

    #[test]
    fn test_page_serialization() {
        assert_eq!(serde_json::to_value(Page::Home).unwrap(), "home");
        assert_eq!(serde_json::to_value(Page::Map).unwrap(), "map");
        assert_eq!(
            serde_json::to_value(Page::Coordinates).unwrap(),
            "coordinates"
        );
    }
}
