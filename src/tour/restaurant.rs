use crate::{
    geo::Coordinate,
    search::{GeoPoint, PointId},
};
use serde::{Deserialize, Serialize};

/// The parts of a restaurant record that tour planning needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: PointId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Restaurant {
    pub fn to_point(&self) -> GeoPoint {
        GeoPoint {
            id: self.id,
            label: self.name.clone(),
            coordinate: self.coordinate,
        }
    }
}
