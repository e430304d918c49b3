use crate::{
    error::{Error, Result},
    geo::{eta_bucket, Coordinate},
    search::PointId,
    tour::Restaurant,
};
use serde::Serialize;
use std::{collections::HashMap, fmt::Debug, io::Read, path::Path};

/// Looks up restaurants by id. Implemented by whatever owns the restaurant
/// records; the planner only needs this one query.
pub trait PointSource: Debug {
    /// The restaurants with the given ids, in the same order. Fails on the
    /// first id that does not exist.
    fn points_by_ids(&self, ids: &[PointId]) -> Result<Vec<Restaurant>>;
}

/// An in-memory set of restaurants, typically loaded from a JSON array.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    restaurants: Vec<Restaurant>,
    index: HashMap<PointId, usize>,
}

impl Catalogue {
    /// Build a catalogue. A later record with an already seen id replaces
    /// the earlier one.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        let mut catalogue = Self::default();
        for restaurant in restaurants {
            match catalogue.index.get(&restaurant.id) {
                Some(&position) => catalogue.restaurants[position] = restaurant,
                None => {
                    catalogue
                        .index
                        .insert(restaurant.id, catalogue.restaurants.len());
                    catalogue.restaurants.push(restaurant);
                }
            }
        }
        catalogue
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let restaurants: Vec<Restaurant> = serde_json::from_reader(reader)?;
        Ok(Self::new(restaurants))
    }

    pub fn get(&self, id: PointId) -> Option<&Restaurant> {
        self.index.get(&id).map(|&position| &self.restaurants[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Restaurants within `radius_km` of `origin`, closest first.
    pub fn nearby(&self, origin: &Coordinate, radius_km: f64, eta_speed_kmh: f64) -> Vec<NearbyRestaurant> {
        let mut nearby: Vec<NearbyRestaurant> = self
            .restaurants
            .iter()
            .filter_map(|restaurant| {
                let distance = origin.distance_to(&restaurant.coordinate);
                (distance <= radius_km).then(|| NearbyRestaurant {
                    restaurant: restaurant.clone(),
                    distance_km: (distance * 100.).round() / 100.,
                    eta: eta_bucket(distance, eta_speed_kmh),
                })
            })
            .collect();
        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        nearby
    }
}

impl PointSource for Catalogue {
    fn points_by_ids(&self, ids: &[PointId]) -> Result<Vec<Restaurant>> {
        ids.iter()
            .map(|&id| self.get(id).cloned().ok_or(Error::UnknownPoint(id)))
            .collect()
    }
}

/// A restaurant with its distance from a reference location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    /// Rounded to two decimals
    pub distance_km: f64,
    pub eta: &'static str,
}
