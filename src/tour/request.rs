use crate::{
    error::{Error, Result},
    geo::Coordinate,
    search::PointId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_TOUR_STOPS: usize = 2;

/// Ask for a tour through `restaurant_ids`, setting off from
/// `user_location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRequest {
    pub restaurant_ids: Vec<PointId>,
    pub user_location: Coordinate,
}

impl TourRequest {
    pub fn new(restaurant_ids: Vec<PointId>, user_location: Coordinate) -> Self {
        Self {
            restaurant_ids,
            user_location,
        }
    }

    /// A tour needs at least two distinct restaurants.
    pub fn validate(&self) -> Result<()> {
        if self.restaurant_ids.len() < MIN_TOUR_STOPS {
            return Err(Error::invalid_tour(format!(
                "at least {MIN_TOUR_STOPS} restaurants are required"
            )));
        }
        let mut seen = HashSet::with_capacity(self.restaurant_ids.len());
        for &id in &self.restaurant_ids {
            if !seen.insert(id) {
                return Err(Error::invalid_tour(format!("duplicate restaurant {id}")));
            }
        }
        Ok(())
    }
}
