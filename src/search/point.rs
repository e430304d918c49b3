use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller supplied identifier of a point of interest, e.g. a restaurant's
/// primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl From<u64> for PointId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A labelled location that a route can visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub id: PointId,
    pub label: String,
    pub coordinate: Coordinate,
}

impl GeoPoint {
    pub fn new(id: PointId, label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            label: label.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        self.coordinate.distance_to(&other.coordinate)
    }
}
