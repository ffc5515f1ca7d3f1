//! Risk classification and aggregation.
//!
//! Pure functions mapping raw model outputs to risk bands and combining the
//! two independent signals into one overall verdict. No state, no I/O.

use crate::models::{
    CoastalAssessment, Coordinate, OverallAssessment, RiskBand, RiskReport, Signal,
    TideAssessment,
};
use crate::store::ModelError;

/// Tide scores at or above this value classify as [`RiskBand::High`].
pub const TIDE_HIGH_THRESHOLD: f64 = 2.5;

/// Tide scores at or above this value classify as [`RiskBand::Moderate`].
pub const TIDE_MODERATE_THRESHOLD: f64 = 1.5;

/// Classify a continuous tide risk score into a band.
///
/// Inclusive lower bounds, evaluated high to low. Non-finite scores violate
/// the precondition and fail with [`ModelError::InvalidScore`].
pub fn classify_tide(score: f64) -> Result<RiskBand, ModelError> {
    if !score.is_finite() {
        return Err(ModelError::InvalidScore(score));
    }
    let band = if score >= TIDE_HIGH_THRESHOLD {
        RiskBand::High
    } else if score >= TIDE_MODERATE_THRESHOLD {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    };
    Ok(band)
}

/// Classify a coastal flood risk label into a band.
///
/// Exact matches on `"High"` and `"Moderate"` map to their bands; every other
/// value, including `"Low"` and unrecognized strings, maps to
/// [`RiskBand::Low`]. The permissive fallback reproduces the trained
/// pipeline's observed behavior; note that a misspelled severe label silently
/// reads as safe. Use [`RiskBand::parse_label`] where the unrecognized case
/// must stay visible.
pub fn classify_coastal_label(label: &str) -> RiskBand {
    RiskBand::parse_label(label).unwrap_or(RiskBand::Low)
}

/// Build a risk report from the two model signals.
///
/// Each signal is handled independently: a missing or failed model leaves its
/// side of the report unavailable without affecting the other. The overall
/// verdict is only computed when both signals are ready.
pub fn evaluate(
    coordinate: Coordinate,
    tide: Signal<f64>,
    coastal: Signal<String>,
) -> RiskReport {
    let tide = match tide {
        Signal::Ready(score) => match classify_tide(score) {
            Ok(band) => Signal::Ready(TideAssessment { score, band }),
            Err(err) => Signal::unavailable(err.to_string()),
        },
        Signal::Unavailable { reason } => Signal::Unavailable { reason },
    };

    let coastal = match coastal {
        Signal::Ready(label) => {
            let band = classify_coastal_label(&label);
            Signal::Ready(CoastalAssessment { label, band })
        }
        Signal::Unavailable { reason } => Signal::Unavailable { reason },
    };

    let overall = match (&tide, &coastal) {
        (Signal::Ready(t), Signal::Ready(c)) => Some(aggregate(t.score, c.band)),
        _ => None,
    };

    RiskReport {
        coordinate,
        generated_at: chrono::Utc::now(),
        tide,
        coastal,
        overall,
    }
}

/// Combine both signals into the overall verdict.
///
/// The raw tide score is re-tested against the classification thresholds
/// rather than reusing the derived band; the two agree because they share
/// thresholds, but the raw-score comparison is the behavior the advisory
/// contract is written against.
fn aggregate(tide_score: f64, coastal_band: RiskBand) -> OverallAssessment {
    let band = if tide_score >= TIDE_HIGH_THRESHOLD || coastal_band == RiskBand::High {
        RiskBand::High
    } else if tide_score >= TIDE_MODERATE_THRESHOLD || coastal_band == RiskBand::Moderate {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    };
    OverallAssessment::for_band(band)
}
