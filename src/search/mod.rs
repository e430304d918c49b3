//! Best-first search over visiting orders of a small set of points.

mod distance_table;
mod frontier;
pub mod heuristics;
mod point;
mod point_registry;
mod route_optimizer;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;
mod visited_set;

pub use distance_table::DistanceTable;
pub use frontier::{ClosedSet, Frontier};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use point::{GeoPoint, PointId};
pub use point_registry::PointRegistry;
pub use route_optimizer::{Route, RouteOptimizer};
pub use search_node::{NodeId, SearchNode, StateSignature, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, TerminationCondition};
pub use visited_set::{PointIndex, VisitedSet};
