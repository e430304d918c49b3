use crate::search::{HeuristicValue, NodeId, PointIndex, SearchNode, VisitedSet, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search. Nodes are
/// append-only: once inserted they are never modified, so ids handed to the
/// frontier stay valid and keep their rank.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    /// Create the space together with its root node, standing at `point`
    /// with only `point` visited.
    pub fn new(num_points: usize, point: PointIndex, g: HeuristicValue, h: HeuristicValue) -> Self {
        let root_node_id = NodeId(0);
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(
            root_node_id,
            point,
            VisitedSet::new(num_points).with(point),
            g,
            h,
        ));
        Self {
            root_node_id,
            nodes,
        }
    }

    /// Insert the successor of `parent_id` that moves to `point`.
    pub fn insert_child(
        &mut self,
        parent_id: NodeId,
        point: PointIndex,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> &SearchNode {
        let node_id = NodeId(self.nodes.len());
        let child = SearchNode::new_with_parent(node_id, self.get_node(parent_id), point, g, h);
        self.nodes.push(child);
        self.get_node(node_id)
    }

    /// The points visited on the way to `node`, in visiting order.
    pub fn extract_route(&self, node: &SearchNode) -> Vec<PointIndex> {
        let mut route = vec![node.get_point()];
        let mut current_node = node;
        while NO_NODE != current_node.get_parent_id() {
            current_node = self.get_node(current_node.get_parent_id());
            route.push(current_node.get_point());
        }
        route.reverse();
        route
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
