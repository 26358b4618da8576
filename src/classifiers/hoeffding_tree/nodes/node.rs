use crate::classifiers::hoeffding_tree::nodes::learning_node::LearningNode;
use crate::classifiers::hoeffding_tree::nodes::split_node::SplitNode;

/// Index of a node in the tree arena.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(LearningNode),
    Split(SplitNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&LearningNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Split(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut LearningNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&SplitNode> {
        match self {
            Node::Split(split) => Some(split),
            Node::Leaf(_) => None,
        }
    }
}
