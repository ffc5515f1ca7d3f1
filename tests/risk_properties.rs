//! Property tests for the classification and aggregation rules.

use proptest::prelude::*;

use coastrisk::models::{Coordinate, RiskBand, Signal};
use coastrisk::services::{classify_coastal_label, classify_tide, evaluate};

proptest! {
    /// band(a) <= band(b) whenever a <= b.
    #[test]
    fn classify_tide_is_monotonic(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_tide(lo).unwrap() <= classify_tide(hi).unwrap());
    }

    /// Every string outside {"High", "Moderate"} reads as Low.
    #[test]
    fn classify_coastal_label_is_total(label in ".*") {
        let band = classify_coastal_label(&label);
        if label == "High" {
            prop_assert_eq!(band, RiskBand::High);
        } else if label == "Moderate" {
            prop_assert_eq!(band, RiskBand::Moderate);
        } else {
            prop_assert_eq!(band, RiskBand::Low);
        }
    }

    /// The overall band equals the maximum of the per-signal bands. The
    /// aggregation re-tests the raw tide score, but both use the same
    /// thresholds, so the band maximum is an equivalent view.
    #[test]
    fn overall_is_band_maximum(
        score in -10.0f64..10.0,
        label in prop::sample::select(vec!["Low", "Moderate", "High", "Severe", ""]),
    ) {
        let report = evaluate(
            Coordinate::default(),
            Signal::Ready(score),
            Signal::Ready(label.to_string()),
        );
        let tide_band = report.tide.as_ready().unwrap().band;
        let coastal_band = report.coastal.as_ready().unwrap().band;
        let overall = report.overall.unwrap().band;
        prop_assert_eq!(overall, tide_band.max(coastal_band));
    }

    /// A report built from one ready and one unavailable signal never gets an
    /// overall verdict.
    #[test]
    fn single_signal_never_aggregates(score in -10.0f64..10.0) {
        let report = evaluate(
            Coordinate::default(),
            Signal::Ready(score),
            Signal::unavailable("not loaded"),
        );
        prop_assert!(report.overall.is_none());
    }
}
