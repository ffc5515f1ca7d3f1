//! Serialized formats for the pre-trained model artifacts.
//!
//! The artifacts are supplied externally; this module defines how their
//! serialized form is parsed into invocable models. Both loaders return the
//! model together with [`ModelInfo`] metadata carrying a fingerprint of the
//! artifact bytes.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

use super::checksum;
use super::error::{ModelError, StoreError, StoreResult};
use super::{CoastalModel, ModelInfo, TideModel, COASTAL_MODEL_NAME, TIDE_MODEL_NAME};

/// Serialized form of the tide prediction model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TideArtifact {
    /// Linear regression over raw coordinate features.
    Linear {
        intercept: f64,
        lat_weight: f64,
        lon_weight: f64,
    },
}

/// Serialized form of the coastal flood risk classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoastalArtifact {
    /// Nearest-centroid classifier over raw coordinate features.
    NearestCentroid { centroids: Vec<Centroid> },
}

/// One labeled reference point of the nearest-centroid classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Tide model: `score = intercept + lat_weight * lat + lon_weight * lon`.
#[derive(Debug, Clone)]
pub struct LinearTideModel {
    intercept: f64,
    lat_weight: f64,
    lon_weight: f64,
}

impl TideModel for LinearTideModel {
    fn predict(&self, coordinate: &Coordinate) -> Result<f64, ModelError> {
        let score = self.intercept
            + self.lat_weight * coordinate.latitude()
            + self.lon_weight * coordinate.longitude();
        if !score.is_finite() {
            return Err(ModelError::InvalidScore(score));
        }
        Ok(score)
    }
}

/// Coastal model: label of the nearest centroid.
///
/// Distance is squared euclidean over raw degrees, the metric a classifier
/// trained on raw `[lat, lon]` features applies.
#[derive(Debug, Clone)]
pub struct NearestCentroidModel {
    centroids: Vec<Centroid>,
}

impl CoastalModel for NearestCentroidModel {
    fn predict(&self, coordinate: &Coordinate) -> Result<String, ModelError> {
        self.centroids
            .iter()
            .min_by(|a, b| {
                distance_sq(a, coordinate)
                    .partial_cmp(&distance_sq(b, coordinate))
                    .unwrap_or(Ordering::Equal)
            })
            .map(|centroid| centroid.label.clone())
            .ok_or_else(|| ModelError::Invocation("classifier has no centroids".to_string()))
    }
}

fn distance_sq(centroid: &Centroid, coordinate: &Coordinate) -> f64 {
    let dlat = centroid.latitude - coordinate.latitude();
    let dlon = centroid.longitude - coordinate.longitude();
    dlat * dlat + dlon * dlon
}

/// Load the tide prediction model from its artifact file.
pub fn load_tide_model(path: &Path) -> StoreResult<(LinearTideModel, ModelInfo)> {
    let bytes = read_artifact(TIDE_MODEL_NAME, path)?;
    let artifact: TideArtifact = serde_json::from_slice(&bytes).map_err(|source| {
        StoreError::Parse {
            name: TIDE_MODEL_NAME,
            source,
        }
    })?;

    let TideArtifact::Linear {
        intercept,
        lat_weight,
        lon_weight,
    } = artifact;
    if ![intercept, lat_weight, lon_weight]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(StoreError::Invalid {
            name: TIDE_MODEL_NAME,
            reason: "linear coefficients must be finite".to_string(),
        });
    }

    let info = ModelInfo {
        name: TIDE_MODEL_NAME.to_string(),
        kind: "linear".to_string(),
        fingerprint: checksum::fingerprint(&bytes),
    };
    Ok((
        LinearTideModel {
            intercept,
            lat_weight,
            lon_weight,
        },
        info,
    ))
}

/// Load the coastal flood risk model from its artifact file.
pub fn load_coastal_model(path: &Path) -> StoreResult<(NearestCentroidModel, ModelInfo)> {
    let bytes = read_artifact(COASTAL_MODEL_NAME, path)?;
    let artifact: CoastalArtifact = serde_json::from_slice(&bytes).map_err(|source| {
        StoreError::Parse {
            name: COASTAL_MODEL_NAME,
            source,
        }
    })?;

    let CoastalArtifact::NearestCentroid { centroids } = artifact;
    if centroids.is_empty() {
        return Err(StoreError::Invalid {
            name: COASTAL_MODEL_NAME,
            reason: "classifier requires at least one centroid".to_string(),
        });
    }

    let info = ModelInfo {
        name: COASTAL_MODEL_NAME.to_string(),
        kind: "nearest_centroid".to_string(),
        fingerprint: checksum::fingerprint(&bytes),
    };
    Ok((NearestCentroidModel { centroids }, info))
}

fn read_artifact(name: &'static str, path: &Path) -> StoreResult<Vec<u8>> {
    fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::ModelMissing {
                name,
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io { name, source }
        }
    })
}
