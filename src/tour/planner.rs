use crate::{
    config::PlannerConfig,
    error::{Error, Result},
    geo::Coordinate,
    search::{PointId, RouteOptimizer},
    tour::{PointSource, Restaurant, TourRequest},
};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

pub const ALGORITHM_NAME: &str = "A*";
pub const START_LABEL: &str = "Your location";

/// One restaurant on a planned tour. `order` starts at 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourStop {
    pub restaurant_id: PointId,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub order: usize,
}

/// A single hop of a tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourLeg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    pub origin: Coordinate,
    pub destination: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPlan {
    pub stops: Vec<TourStop>,
    /// From the user's location through every stop, in kilometres
    pub total_distance_km: f64,
    /// Travel time plus time spent at the stops
    pub estimated_minutes: u32,
    pub algorithm: &'static str,
    pub legs: Vec<TourLeg>,
}

/// Turns tour requests into planned tours, looking restaurants up in a
/// [`PointSource`].
#[derive(Debug)]
pub struct TourPlanner<'a> {
    source: &'a dyn PointSource,
    config: PlannerConfig,
}

impl<'a> TourPlanner<'a> {
    pub fn new(source: &'a dyn PointSource, config: PlannerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn plan(&self, request: &TourRequest) -> Result<TourPlan> {
        request.validate()?;
        let restaurants = self.source.points_by_ids(&request.restaurant_ids)?;

        let mut optimizer = RouteOptimizer::new()
            .with_heuristic(self.config.heuristic)
            .with_limits(self.config.search_limits());
        for restaurant in &restaurants {
            optimizer.register_point(restaurant.to_point());
        }
        let route = optimizer.optimize_route(request.user_location, &request.restaurant_ids)?;

        let by_id: HashMap<PointId, &Restaurant> = restaurants.iter().map(|r| (r.id, r)).collect();
        let stops = route
            .order
            .iter()
            .enumerate()
            .map(|(position, id)| {
                let restaurant = by_id.get(id).ok_or(Error::UnknownPoint(*id))?;
                Ok(TourStop {
                    restaurant_id: restaurant.id,
                    name: restaurant.name.clone(),
                    address: restaurant.address.clone(),
                    coordinate: restaurant.coordinate,
                    order: position + 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let legs = self.legs(&request.user_location, &stops);
        let travel_minutes = legs
            .iter()
            .fold(0u32, |total, leg| total.saturating_add(leg.estimated_minutes));
        let num_stops = u32::try_from(stops.len()).unwrap_or(u32::MAX);
        let estimated_minutes =
            travel_minutes.saturating_add(self.config.dwell_minutes.saturating_mul(num_stops));

        info!(
            num_stops = stops.len(),
            total_distance_km = route.total_distance_km,
            estimated_minutes,
            "tour planned"
        );
        Ok(TourPlan {
            stops,
            total_distance_km: route.total_distance_km,
            estimated_minutes,
            algorithm: ALGORITHM_NAME,
            legs,
        })
    }

    /// The leg from the user to the first stop, then one leg per pair of
    /// consecutive stops.
    fn legs(&self, user_location: &Coordinate, stops: &[TourStop]) -> Vec<TourLeg> {
        let estimator = self.config.travel_estimator();
        let leg = |from: &str, origin: Coordinate, to: &TourStop| {
            let distance_km = origin.distance_to(&to.coordinate);
            TourLeg {
                from: from.to_string(),
                to: to.name.clone(),
                distance_km,
                estimated_minutes: estimator.minutes(distance_km),
                origin,
                destination: to.coordinate,
            }
        };

        let mut legs = Vec::with_capacity(stops.len());
        if let Some(first) = stops.first() {
            legs.push(leg(START_LABEL, *user_location, first));
        }
        legs.extend(
            stops
                .iter()
                .tuple_windows()
                .map(|(from, to)| leg(&from.name, from.coordinate, to)),
        );
        legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn request(ids: &[u64]) -> TourRequest {
        TourRequest::new(ids.iter().copied().map(PointId).collect(), ORIGIN)
    }

    #[test]
    fn plans_tour_with_legs_and_minutes() {
        let catalogue = small_catalogue();
        let planner = TourPlanner::new(&catalogue, PlannerConfig::default());
        let plan = planner.plan(&request(&[3, 1, 2])).unwrap();

        let order: Vec<u64> = plan.stops.iter().map(|s| s.restaurant_id.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(
            plan.stops.iter().map(|s| s.order).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(plan.algorithm, "A*");

        assert_eq!(plan.legs.len(), 3);
        assert_eq!(plan.legs[0].from, "Your location");
        assert_eq!(plan.legs[0].to, "Tacos El Güero");
        assert_eq!(plan.legs[1].from, "Tacos El Güero");
        assert_eq!(plan.legs[2].to, "Mariscos Playa");

        // 1 km, 2 km and 2 km legs are all under the 5 minute floor at 30 km/h
        assert!(plan.legs.iter().all(|leg| leg.estimated_minutes == 5));
        assert_eq!(plan.estimated_minutes, 3 * 5 + 3 * 30);

        let leg_total: f64 = plan.legs.iter().map(|leg| leg.distance_km).sum();
        assert_approx_eq!(plan.total_distance_km, leg_total, 1e-9);
        assert_approx_eq!(plan.total_distance_km, 5.0, 0.01);
    }

    #[test]
    fn slow_speed_lifts_leg_minutes_above_floor() {
        let catalogue = small_catalogue();
        let config = PlannerConfig {
            average_speed_kmh: 6.0,
            dwell_minutes: 0,
            ..Default::default()
        };
        let planner = TourPlanner::new(&catalogue, config);
        let plan = planner.plan(&request(&[1, 2])).unwrap();
        // 1 km then 2 km on foot, truncated to whole minutes
        let minutes: Vec<u32> = plan.legs.iter().map(|leg| leg.estimated_minutes).collect();
        assert!(minutes[0] == 9 || minutes[0] == 10, "got {:?}", minutes);
        assert!(minutes[1] == 19 || minutes[1] == 20, "got {:?}", minutes);
        assert_eq!(plan.estimated_minutes, minutes.iter().sum::<u32>());
    }

    #[test]
    fn extreme_config_saturates_minutes() {
        let catalogue = small_catalogue();
        let crawling = PlannerConfig::from_text("average-speed-kmh = 1e-9").unwrap();
        let plan = TourPlanner::new(&catalogue, crawling)
            .plan(&request(&[1, 2]))
            .unwrap();
        assert!(plan.legs.iter().all(|leg| leg.estimated_minutes == u32::MAX));
        assert_eq!(plan.estimated_minutes, u32::MAX);

        let lingering = PlannerConfig::from_text("dwell-minutes = 4000000000").unwrap();
        let plan = TourPlanner::new(&catalogue, lingering)
            .plan(&request(&[1, 2]))
            .unwrap();
        assert_eq!(plan.estimated_minutes, u32::MAX);
    }

    #[test]
    fn invalid_requests_fail_before_lookup() {
        let catalogue = small_catalogue();
        let planner = TourPlanner::new(&catalogue, PlannerConfig::default());
        assert!(matches!(
            planner.plan(&request(&[1])),
            Err(Error::InvalidTour(_))
        ));
        assert!(matches!(
            planner.plan(&request(&[1, 1])),
            Err(Error::InvalidTour(_))
        ));
        assert!(matches!(
            planner.plan(&request(&[1, 404])),
            Err(Error::UnknownPoint(PointId(404)))
        ));
    }

    #[test]
    fn plan_serialises_camel_case() {
        let catalogue = small_catalogue();
        let planner = TourPlanner::new(&catalogue, PlannerConfig::default());
        let plan = planner.plan(&request(&[4, 1])).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("totalDistanceKm").is_some());
        assert!(json.get("estimatedMinutes").is_some());
        assert_eq!(json["stops"][0]["restaurantId"], 4);
        assert_eq!(json["legs"][0]["from"], "Your location");
    }
}
