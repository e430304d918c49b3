//! Tour generation on top of the route optimiser: request validation,
//! restaurant lookup and per-leg travel estimates.

mod catalogue;
mod planner;
mod request;
mod restaurant;

pub use catalogue::{Catalogue, NearbyRestaurant, PointSource};
pub use planner::{TourLeg, TourPlan, TourPlanner, TourStop, ALGORITHM_NAME, START_LABEL};
pub use request::{TourRequest, MIN_TOUR_STOPS};
pub use restaurant::Restaurant;
