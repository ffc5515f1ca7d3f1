//! Risk classification types and the structured assessment report.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Three-level risk discretization used for both display and aggregation.
///
/// The derived ordering is total: `Low < Moderate < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Parse a model-produced label by exact match.
    ///
    /// Returns `None` for anything outside the closed label set, so callers
    /// can distinguish an unrecognized label from a genuine `Low`.
    pub fn parse_label(label: &str) -> Option<RiskBand> {
        match label {
            "Low" => Some(RiskBand::Low),
            "Moderate" => Some(RiskBand::Moderate),
            "High" => Some(RiskBand::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }

    /// Advisory text shown with the overall assessment. These strings are part
    /// of the report contract, not decoration.
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskBand::High => "Avoid all coastal activities immediately",
            RiskBand::Moderate => "Exercise extreme caution near coastal areas",
            RiskBand::Low => "Generally safe conditions for coastal activities",
        }
    }

    /// Short headline for the overall assessment card.
    pub fn headline(&self) -> &'static str {
        match self {
            RiskBand::High => "Critical risk",
            RiskBand::Moderate => "Moderate risk",
            RiskBand::Low => "Low risk",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single model signal within a report.
///
/// A signal is unavailable when its model was never loaded or when the
/// invocation failed; the reason is kept for display. One degraded signal
/// never suppresses the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Signal<T> {
    Ready(T),
    Unavailable { reason: String },
}

impl<T> Signal<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Signal::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Signal::Ready(_))
    }

    /// The ready value, if any.
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Signal::Ready(value) => Some(value),
            Signal::Unavailable { .. } => None,
        }
    }
}

/// Tide signal: continuous score plus its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideAssessment {
    /// Raw model output, unitless scale roughly 0-3, higher = riskier.
    pub score: f64,
    pub band: RiskBand,
}

/// Coastal flood signal: categorical label plus its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoastalAssessment {
    /// Label exactly as produced by the model.
    pub label: String,
    pub band: RiskBand,
}

/// Combined verdict, only computed when both signals are available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub band: RiskBand,
    pub headline: String,
    pub advisory: String,
}

impl OverallAssessment {
    pub fn for_band(band: RiskBand) -> Self {
        Self {
            band,
            headline: band.headline().to_string(),
            advisory: band.advisory().to_string(),
        }
    }
}

/// Structured result of one analysis request.
///
/// Constructed fresh per request, never persisted. `overall` is present iff
/// both signals are ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub coordinate: Coordinate,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub tide: Signal<TideAssessment>,
    pub coastal: Signal<CoastalAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallAssessment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_ordering() {
        assert!(RiskBand::Low < RiskBand::Moderate);
        assert!(RiskBand::Moderate < RiskBand::High);
    }

    #[test]
    fn test_parse_label_exact_match_only() {
        assert_eq!(RiskBand::parse_label("High"), Some(RiskBand::High));
        assert_eq!(RiskBand::parse_label("Moderate"), Some(RiskBand::Moderate));
        assert_eq!(RiskBand::parse_label("Low"), Some(RiskBand::Low));
        assert_eq!(RiskBand::parse_label("high"), None);
        assert_eq!(RiskBand::parse_label("Severe"), None);
        assert_eq!(RiskBand::parse_label(""), None);
    }

    #[test]
    fn test_advisory_strings() {
        assert_eq!(
            RiskBand::High.advisory(),
            "Avoid all coastal activities immediately"
        );
        assert_eq!(
            RiskBand::Moderate.advisory(),
            "Exercise extreme caution near coastal areas"
        );
        assert_eq!(
            RiskBand::Low.advisory(),
            "Generally safe conditions for coastal activities"
        );
    }

    #[test]
    fn test_signal_serialization_shape() {
        let ready: Signal<TideAssessment> = Signal::Ready(TideAssessment {
            score: 2.6,
            band: RiskBand::High,
        });
        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["band"], "High");

        let down: Signal<TideAssessment> = Signal::unavailable("model not loaded");
        let json = serde_json::to_value(&down).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["reason"], "model not loaded");
    }
}
