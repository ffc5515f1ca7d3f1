use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees.
///
/// Values are validated on construction: latitude must lie in `[-90, 90]`,
/// longitude in `[-180, 180]`, and both components must be finite. Out-of-range
/// input is rejected at this boundary and never reaches the risk evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form used to re-check deserialized input.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Dublin, the session's starting location.
    pub const DUBLIN: Coordinate = Coordinate {
        latitude: 53.3498,
        longitude: -6.2603,
    };

    /// Create a validated coordinate.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// outside the valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite {
                latitude,
                longitude,
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DUBLIN
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.latitude, self.longitude)
    }
}

/// Validation error for coordinate input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside the valid range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinate components must be finite, got ({latitude}, {longitude})")]
    NonFinite { latitude: f64, longitude: f64 },
}
