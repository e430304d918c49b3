use crate::search::{DistanceTable, Heuristic, HeuristicValue, PointIndex};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(
        &mut self,
        _point: PointIndex,
        _pending: &[PointIndex],
        _distances: &DistanceTable,
    ) -> HeuristicValue {
        (0.).into()
    }
}
