use crate::geo::{Coordinate, EARTH_RADIUS_KM};
use crate::search::{GeoPoint, PointId, PointRegistry};
use crate::tour::{Catalogue, Restaurant};
use itertools::Itertools;

pub const ORIGIN: Coordinate = Coordinate {
    latitude: 0.0,
    longitude: 0.0,
};

/// Length of one degree of a great circle.
pub const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// A coordinate `north_km` north and `east_km` east of [`ORIGIN`]. Close to
/// the equator this lays points out on a near perfect kilometre grid.
pub fn coordinate_at_km(north_km: f64, east_km: f64) -> Coordinate {
    Coordinate::new(north_km / KM_PER_DEGREE, east_km / KM_PER_DEGREE)
}

pub fn point_at_km(id: u64, north_km: f64, east_km: f64) -> GeoPoint {
    GeoPoint {
        id: PointId(id),
        label: format!("point {id}"),
        coordinate: coordinate_at_km(north_km, east_km),
    }
}

pub fn registry_of(points: &[GeoPoint]) -> PointRegistry {
    points.iter().cloned().collect()
}

/// Distance travelled by visiting `order` starting from `start`.
pub fn route_length(start: &Coordinate, registry: &PointRegistry, order: &[PointId]) -> f64 {
    let mut length = 0.;
    let mut current = *start;
    for id in order {
        let next = registry.get(*id).expect("unknown point in route").coordinate;
        length += current.distance_to(&next);
        current = next;
    }
    length
}

/// Every ordering of `ids`.
pub fn permutations(ids: &[PointId]) -> Vec<Vec<PointId>> {
    ids.iter().copied().permutations(ids.len()).collect()
}

pub fn restaurant_at_km(id: u64, name: &str, north_km: f64, east_km: f64) -> Restaurant {
    Restaurant {
        id: PointId(id),
        name: name.to_string(),
        address: format!("{id} Calle Falsa"),
        coordinate: coordinate_at_km(north_km, east_km),
    }
}

/// Five restaurants spread over a few kilometres around [`ORIGIN`].
pub fn small_catalogue() -> Catalogue {
    Catalogue::new(vec![
        restaurant_at_km(1, "Tacos El Güero", 0.0, 1.0),
        restaurant_at_km(2, "La Cocina de Ana", 0.0, 3.0),
        restaurant_at_km(3, "Mariscos Playa", 2.0, 3.0),
        restaurant_at_km(4, "Café Central", -1.0, -1.0),
        restaurant_at_km(5, "Pozolería Lupita", 8.0, -6.0),
    ])
}
