use crate::classifiers::hoeffding_tree::nodes::node::NodeId;

/// Result of filtering an example down to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundNode {
    node: NodeId,
    parent: Option<NodeId>,
    parent_branch: Option<usize>,
}

impl FoundNode {
    pub fn new(node: NodeId, parent: Option<NodeId>, parent_branch: Option<usize>) -> Self {
        Self {
            node,
            parent,
            parent_branch,
        }
    }

    pub fn get_node(&self) -> NodeId {
        self.node
    }

    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Value of the parent's split feature that led here; `None` at the root.
    pub fn get_parent_branch(&self) -> Option<usize> {
        self.parent_branch
    }
}
