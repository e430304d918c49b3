//! Orders a handful of points into a short visiting sequence.
//!
//! The search is best-first over partial routes: starting from the point
//! nearest to the start coordinate, each node extends its route by one
//! unvisited point and nodes are expanded in order of `f = g + h`, where `g`
//! is the distance travelled so far (including the leg from the start
//! coordinate to the first point) and `h` comes from a [`Heuristic`]. The
//! first node popped that covers every point is the answer.
//!
//! The state space is the set of permutations, so the worst case is
//! factorial. This is only meant for tens of points, and long-running
//! requests should be bounded with [`SearchLimits`].

use crate::{
    error::{Error, Result},
    geo::Coordinate,
    search::{
        ClosedSet, DistanceTable, Frontier, GeoPoint, HeuristicName, PointId, PointIndex,
        PointRegistry, SearchLimits, SearchSpace, SearchStatistics, TerminationCondition,
    },
};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// A visiting order together with the distance it covers, in kilometres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub order: Vec<PointId>,
    pub total_distance_km: f64,
}

impl Route {
    pub fn empty() -> Self {
        Self {
            order: vec![],
            total_distance_km: 0.,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Route optimiser for a single request. Register the candidate points, then
/// call [`RouteOptimizer::optimize_route`]. Create a new optimiser for every
/// request rather than sharing one.
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    registry: PointRegistry,
    heuristic_name: HeuristicName,
    limits: SearchLimits,
}

impl RouteOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(mut self, heuristic_name: HeuristicName) -> Self {
        self.heuristic_name = heuristic_name;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Add a point, overwriting any point already registered under `id`.
    /// Coordinates are not validated.
    pub fn register(&mut self, id: PointId, label: impl Into<String>, latitude: f64, longitude: f64) {
        self.register_point(GeoPoint::new(id, label, latitude, longitude));
    }

    /// Add an already built point, overwriting any point with the same id.
    pub fn register_point(&mut self, point: GeoPoint) {
        self.registry.register(point);
    }

    pub fn get_point(&self, id: PointId) -> Option<&GeoPoint> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    /// Find a short order in which to visit every point in `ids` when
    /// setting off from `start`. Every id must have been registered.
    /// Repeated ids are only visited once.
    pub fn optimize_route(&self, start: Coordinate, ids: &[PointId]) -> Result<Route> {
        self.optimize_route_with_statistics(start, ids)
            .map(|(route, _)| route)
    }

    pub fn optimize_route_with_statistics(
        &self,
        start: Coordinate,
        ids: &[PointId],
    ) -> Result<(Route, SearchStatistics)> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut points = Vec::with_capacity(ids.len());
        for &id in ids {
            if seen.insert(id) {
                points.push(self.registry.resolve(id)?);
            } else {
                debug!(point = %id, "ignoring repeated point");
            }
        }

        match points.as_slice() {
            [] => Ok((Route::empty(), SearchStatistics::new())),
            [only] => {
                let route = Route {
                    order: vec![only.id],
                    total_distance_km: start.distance_to(&only.coordinate),
                };
                Ok((route, SearchStatistics::new()))
            }
            _ => self.search(start, &points),
        }
    }

    fn search(&self, start: Coordinate, points: &[&GeoPoint]) -> Result<(Route, SearchStatistics)> {
        info!(num_points = points.len(), heuristic = ?self.heuristic_name, "optimising route");
        let distances = DistanceTable::new(&start, points);
        let num_points = distances.num_points();
        let mut heuristic = self.heuristic_name.create();
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.limits);

        let Some(seed) = distances.nearest_to_start() else {
            return Ok((Route::empty(), statistics));
        };
        let pending: Vec<PointIndex> = (0..num_points).filter(|&i| i != seed).collect();
        let root_g = OrderedFloat(distances.distance_from_start(seed));
        let root_h = heuristic.evaluate(seed, &pending, &distances);
        debug!(seed = %points[seed].id, g = root_g.into_inner(), h = root_h.into_inner());

        let mut search_space = SearchSpace::new(num_points, seed, root_g, root_h);
        let mut frontier = Frontier::new();
        let mut closed = ClosedSet::new();
        frontier.push(search_space.get_root_node());

        while let Some(node_id) = frontier.pop() {
            let node = search_space.get_node(node_id);

            if node.num_visited() == num_points {
                let order = search_space
                    .extract_route(node)
                    .into_iter()
                    .map(|index| points[index].id)
                    .collect();
                let route = Route {
                    order,
                    total_distance_km: node.get_g().into_inner(),
                };
                statistics.finalise_search();
                info!(total_distance_km = route.total_distance_km, "route found");
                return Ok((route, statistics));
            }

            if !closed.close(node.signature()) {
                statistics.increment_pruned_nodes();
                continue;
            }

            if let Some(error) = termination.should_terminate(statistics.expanded_nodes()) {
                statistics.finalise_search();
                warn!("stopping search: {}", error);
                return Err(error);
            }
            statistics.increment_expanded_nodes();
            statistics.register_heuristic_value(node.get_h());

            let point = node.get_point();
            let g_value = node.get_g();
            let pending: Vec<PointIndex> = node.get_visited().missing(num_points).collect();

            for &next in &pending {
                let next_pending: Vec<PointIndex> =
                    pending.iter().copied().filter(|&p| p != next).collect();
                let g = g_value + distances.distance(point, next);
                let h = heuristic.evaluate(next, &next_pending, &distances);
                let child = search_space.insert_child(node_id, next, g, h);
                frontier.push(child);
            }
            statistics.increment_generated_nodes(pending.len());
        }

        statistics.finalise_search();
        error!(num_points, "frontier exhausted before a complete route was found");
        Err(Error::SearchExhausted { num_points })
    }
}
