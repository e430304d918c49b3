use crate::search::{
    heuristics::{NearestPendingHeuristic, ZeroHeuristic},
    DistanceTable, PointIndex,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the distance still to travel when standing at `point` with
    /// `pending` left to visit.
    fn evaluate(
        &mut self,
        point: PointIndex,
        pending: &[PointIndex],
        distances: &DistanceTable,
    ) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(
        help = "Distance to the nearest pending point, plus half of it for \
        every further pending point."
    )]
    NearestPending,
    #[clap(
        name = "zero",
        help = "The zero heuristic, turns the search into uniform cost search."
    )]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::NearestPending => Box::new(NearestPendingHeuristic::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
