use crate::search::{HeuristicValue, NodeId, SearchNode, StateSignature};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::HashSet};

/// Open list of the search, a min-priority queue on f-values. Nodes with
/// equal f-values come out in the order they were generated, which keeps the
/// search deterministic.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: &SearchNode) {
        let node_id = node.get_node_id();
        self.queue.push(node_id, Reverse((node.get_f(), node_id)));
    }

    /// Remove and return the node with the smallest f-value.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Signatures of the nodes that have already been expanded.
#[derive(Debug, Default)]
pub struct ClosedSet {
    signatures: HashSet<StateSignature>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `signature` as expanded. Returns `false` if it already was.
    pub fn close(&mut self, signature: StateSignature) -> bool {
        self.signatures.insert(signature)
    }

    pub fn contains(&self, signature: &StateSignature) -> bool {
        self.signatures.contains(signature)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchSpace;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_ascending_f_order() {
        let mut space = SearchSpace::new(4, 0, OrderedFloat(0.0), OrderedFloat(10.0));
        let root_id = space.get_root_node().get_node_id();
        let mut frontier = Frontier::new();
        frontier.push(space.get_root_node());
        for (point, f) in [(1, 3.0), (2, 1.0), (3, 2.0)] {
            let node = space.insert_child(root_id, point, OrderedFloat(f), OrderedFloat(0.0));
            frontier.push(node);
        }

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop())
            .map(|id| space.get_node(id).get_point())
            .collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_break_by_generation_order() {
        let mut space = SearchSpace::new(4, 0, OrderedFloat(0.0), OrderedFloat(0.0));
        let root_id = space.get_root_node().get_node_id();
        let mut frontier = Frontier::new();
        for point in [3, 1, 2] {
            let node = space.insert_child(root_id, point, OrderedFloat(5.0), OrderedFloat(0.0));
            frontier.push(node);
        }
        assert_eq!(frontier.len(), 3);

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop())
            .map(|id| space.get_node(id).get_point())
            .collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn closed_set_rejects_second_close() {
        let space = SearchSpace::new(2, 0, OrderedFloat(0.0), OrderedFloat(0.0));
        let mut closed = ClosedSet::new();
        let signature = space.get_root_node().signature();
        assert!(closed.close(signature.clone()));
        assert!(!closed.close(signature.clone()));
        assert!(closed.contains(&signature));
        assert_eq!(closed.len(), 1);
    }
}
