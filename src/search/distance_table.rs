use crate::{
    geo::Coordinate,
    search::{GeoPoint, PointIndex},
};

/// Pairwise great-circle distances between the points of one run, plus the
/// distance from the start coordinate to each of them. Points are addressed
/// by their [`PointIndex`], i.e. their position in the request.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    num_points: usize,
    from_start: Vec<f64>,
    distances: Vec<f64>,
}

impl DistanceTable {
    pub fn new(start: &Coordinate, points: &[&GeoPoint]) -> Self {
        let num_points = points.len();
        let from_start = points
            .iter()
            .map(|point| start.distance_to(&point.coordinate))
            .collect();
        let mut distances = vec![0.; num_points * num_points];
        for i in 0..num_points {
            for j in (i + 1)..num_points {
                let d = points[i].distance_to(points[j]);
                distances[i * num_points + j] = d;
                distances[j * num_points + i] = d;
            }
        }
        Self {
            num_points,
            from_start,
            distances,
        }
    }

    #[inline]
    pub fn distance(&self, from: PointIndex, to: PointIndex) -> f64 {
        self.distances[from * self.num_points + to]
    }

    #[inline]
    pub fn distance_from_start(&self, to: PointIndex) -> f64 {
        self.from_start[to]
    }

    /// The point closest to the start coordinate. Ties go to the earlier
    /// index. `None` when there are no points.
    pub fn nearest_to_start(&self) -> Option<PointIndex> {
        let mut best: Option<(PointIndex, f64)> = None;
        for (index, &d) in self.from_start.iter().enumerate() {
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((index, d));
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }
}
