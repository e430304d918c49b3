use crate::search::{HeuristicValue, PointIndex, VisitedSet};

/// Position of a node in its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// Key used to recognise two partial routes that stand at the same point
/// having covered the same points, regardless of the order they were covered
/// in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateSignature {
    pub point: PointIndex,
    pub visited: VisitedSet,
}

/// A [`SearchNode`] is a partial route: it stands at `point` and has visited
/// the points in `visited`. The visiting order itself is recovered by
/// following parent links, so a node never has to copy its ancestors' route.
///
/// Nodes are never modified after they are created; a successor is always a
/// new node.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the node within its search space
    node_id: NodeId,
    /// Node this one was expanded from
    parent_id: NodeId,
    /// Point the partial route currently stands at
    point: PointIndex,
    /// Every point covered so far, including `point`
    visited: VisitedSet,
    /// G-value of the node, i.e. the distance travelled so far.
    g: HeuristicValue,
    /// H-value of the node, i.e. the estimated distance still to travel.
    h: HeuristicValue,
    /// F-value of the node, `g + h`.
    f: HeuristicValue,
}

impl SearchNode {
    /// Create the root node of the search. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(
        node_id: NodeId,
        point: PointIndex,
        visited: VisitedSet,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            parent_id: NO_NODE,
            point,
            visited,
            g,
            h,
            f: g + h,
        }
    }

    /// Create a node that extends `parent` by moving to `point`.
    pub fn new_with_parent(
        node_id: NodeId,
        parent: &SearchNode,
        point: PointIndex,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            parent_id: parent.node_id,
            point,
            visited: parent.visited.with(point),
            g,
            h,
            f: g + h,
        }
    }

    pub fn signature(&self) -> StateSignature {
        StateSignature {
            point: self.point,
            visited: self.visited.clone(),
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_point(&self) -> PointIndex {
        self.point
    }

    pub fn get_visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn num_visited(&self) -> usize {
        self.visited.len()
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn child_extends_parent_by_one_point() {
        let root = SearchNode::new_without_parent(
            NodeId(0),
            2,
            VisitedSet::new(4).with(2),
            OrderedFloat(1.0),
            OrderedFloat(3.0),
        );
        let child = SearchNode::new_with_parent(NodeId(1), &root, 0, OrderedFloat(2.5), OrderedFloat(1.0));

        assert_eq!(root.get_parent_id(), NO_NODE);
        assert_eq!(root.get_f(), OrderedFloat(4.0));
        assert_eq!(child.get_parent_id(), NodeId(0));
        assert_eq!(child.num_visited(), root.num_visited() + 1);
        assert!(child.get_visited().contains(2) && child.get_visited().contains(0));
        assert!(!root.get_visited().contains(0));
        assert_eq!(child.get_f(), OrderedFloat(3.5));
    }

    fn child(id: usize, parent: &SearchNode, point: PointIndex) -> SearchNode {
        let g = parent.get_g() + 1.0;
        SearchNode::new_with_parent(NodeId(id), parent, point, g, OrderedFloat(0.0))
    }

    #[test]
    fn signature_ignores_arrival_order() {
        let root = SearchNode::new_without_parent(
            NodeId(0),
            0,
            VisitedSet::new(4).with(0),
            OrderedFloat(0.0),
            OrderedFloat(0.0),
        );
        // 0 -> 1 -> 2 -> 3 and 0 -> 2 -> 1 -> 3
        let a = child(3, &child(2, &child(1, &root, 1), 2), 3);
        let b = child(6, &child(5, &child(4, &root, 2), 1), 3);
        assert_eq!(a.signature(), b.signature());

        // Same points covered, but standing somewhere else
        let c = child(9, &child(8, &child(7, &root, 1), 3), 2);
        assert_ne!(a.signature(), c.signature());
        assert_eq!(a.get_visited(), c.get_visited());
    }
}
