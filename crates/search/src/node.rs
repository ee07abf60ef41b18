use crate::{problem::SearchState, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: SearchState,
    pub parent: Option<NodeId>,
    /// Catalogue position selected to reach this node. `None` for the root.
    pub action: Option<usize>,
    /// Cumulative verse cost from the root.
    pub g: u64,
    /// Evaluation value, `g + h`.
    pub f: u64,
    pub depth: usize,
}

impl Node {
    pub fn root(state: SearchState) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g: 0,
            f: 0,
            depth: 0,
        }
    }
}

/// Arena holding every node the search has generated.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Catalogue positions from the root to `id`, in selection order.
    pub fn solution_path(&self, id: NodeId) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.nodes[id].depth);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id];
            if let Some(action) = node.action {
                path.push(action);
            }
            current = node.parent;
        }
        path.reverse();
        path
    }
}
