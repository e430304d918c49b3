mod coordinate;
mod travel;

pub use coordinate::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use travel::{eta_bucket, TravelEstimator};
