mod found_node;
mod leaf_statistics;
mod learning_node;
mod node;
mod split_node;

pub use found_node::FoundNode;
pub use leaf_statistics::{ClassCounts, LeafStatistics, NUM_CLASSES};
pub use learning_node::LearningNode;
pub use node::{Node, NodeId};
pub use split_node::SplitNode;
