mod heuristic;
mod nearest_pending;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use nearest_pending::NearestPendingHeuristic;
pub use zero_heuristic::ZeroHeuristic;
