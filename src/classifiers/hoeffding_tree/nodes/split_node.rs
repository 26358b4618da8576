use crate::classifiers::hoeffding_tree::instance_conditional_test::NominalAttributeMultiwayTest;
use crate::classifiers::hoeffding_tree::nodes::node::NodeId;

/// An internal node: one child per value of the split feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNode {
    split_test: NominalAttributeMultiwayTest,
    children: Vec<NodeId>,
}

impl SplitNode {
    pub fn new(split_feature: usize, children: Vec<NodeId>) -> Self {
        Self {
            split_test: NominalAttributeMultiwayTest::new(split_feature),
            children,
        }
    }

    pub fn split_feature(&self) -> usize {
        self.split_test.attribute_index()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn get_child(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).copied()
    }

    /// Child the example should descend into, if its value has a branch.
    pub fn instance_child_index(&self, values: &[usize]) -> Option<usize> {
        self.split_test
            .branch_for_example(values)
            .filter(|&branch| branch < self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_lookup() {
        let node = SplitNode::new(1, vec![4, 5, 6]);
        assert_eq!(node.split_feature(), 1);
        assert_eq!(node.get_child(2), Some(6));
        assert_eq!(node.get_child(3), None);
        assert_eq!(node.instance_child_index(&[0, 2]), Some(2));
        assert_eq!(node.instance_child_index(&[0, 3]), None);
        assert_eq!(node.instance_child_index(&[0]), None);
    }
}
