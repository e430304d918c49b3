//! Estimates the remaining tour length from the nearest pending point.
//!
//! With `m` the distance from the current point to its nearest pending point
//! and `k` the number of pending points, the estimate is `m` for a single
//! pending point and `m + 0.5 * (k - 1) * m` otherwise. This is not a true
//! minimum spanning tree bound and can overestimate, so a search using it is
//! not guaranteed to find the shortest route.

use crate::search::{DistanceTable, Heuristic, HeuristicValue, PointIndex};

#[derive(Clone, Debug, Default)]
pub struct NearestPendingHeuristic {}

impl NearestPendingHeuristic {
    pub fn new() -> Self {
        NearestPendingHeuristic {}
    }
}

impl Heuristic for NearestPendingHeuristic {
    fn evaluate(
        &mut self,
        point: PointIndex,
        pending: &[PointIndex],
        distances: &DistanceTable,
    ) -> HeuristicValue {
        if pending.is_empty() {
            return (0.).into();
        }

        let nearest = pending
            .iter()
            .map(|&other| distances.distance(point, other))
            .fold(f64::INFINITY, f64::min);

        let mut remaining = nearest;
        if pending.len() > 1 {
            remaining += (pending.len() - 1) as f64 * nearest * 0.5;
        }
        remaining.into()
    }
}
