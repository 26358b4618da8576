use crate::classifiers::hoeffding_tree::nodes::{FoundNode, LearningNode, Node, NodeId, SplitNode};
use crate::classifiers::hoeffding_tree::split_decision::SplitDecision;
use crate::core::FeatureDomain;
use crate::core::instances::Example;
use crate::error::{DomainError, Result, VfdtError};
use std::sync::Arc;

/// Node arena of a Hoeffding tree.
///
/// Nodes are addressed by their index. A split pushes the new leaves to the end of the arena
/// and then overwrites the split leaf's slot, so ids already handed out stay valid.
#[derive(Debug, Clone)]
pub struct Tree {
    domain: Arc<FeatureDomain>,
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// A single root leaf on which every feature is eligible.
    pub fn new(domain: Arc<FeatureDomain>) -> Self {
        let root = Node::Leaf(LearningNode::new(&domain, domain.all_features()));
        Self {
            domain,
            nodes: vec![root],
            root: 0,
        }
    }

    /// Assembles a tree from an already validated arena.
    pub(crate) fn from_parts(domain: Arc<FeatureDomain>, nodes: Vec<Node>, root: NodeId) -> Self {
        Self {
            domain,
            nodes,
            root,
        }
    }

    pub fn domain(&self) -> &FeatureDomain {
        &self.domain
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn leaf(&self, id: NodeId) -> Option<&LearningNode> {
        self.node(id).and_then(Node::as_leaf)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of split nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }

    fn depth_from(&self, id: NodeId) -> usize {
        match &self.nodes[id] {
            Node::Leaf(_) => 0,
            Node::Split(split) => {
                1 + split
                    .children()
                    .iter()
                    .map(|&child| self.depth_from(child))
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Descends from the root to the leaf the example belongs to.
    pub fn route(&self, values: &[usize]) -> Result<FoundNode> {
        self.filter_to_leaf(values, "route")
    }

    fn filter_to_leaf(&self, values: &[usize], operation: &'static str) -> Result<FoundNode> {
        self.domain
            .check_example(values)
            .map_err(|e| VfdtError::domain(operation, e))?;

        let mut found = FoundNode::new(self.root, None, None);
        while let Node::Split(split) = &self.nodes[found.get_node()] {
            let branch = split.instance_child_index(values);
            let child = branch.and_then(|b| split.get_child(b));
            let (Some(branch), Some(child)) = (branch, child) else {
                return Err(VfdtError::domain(
                    operation,
                    DomainError::ValueOutOfRange {
                        feature: split.split_feature(),
                        value: values.get(split.split_feature()).copied().unwrap_or_default(),
                        cardinality: split.children().len(),
                    },
                ));
            };
            found = FoundNode::new(child, Some(found.get_node()), Some(branch));
        }
        Ok(found)
    }

    /// Records the example at its leaf and splits the leaf if the decision fires.
    ///
    /// Returns the split feature when a split happened.
    pub fn update(&mut self, example: &Example, decision: &SplitDecision) -> Result<Option<usize>> {
        let leaf_id = self.filter_to_leaf(example.values(), "update")?.get_node();
        let Some(leaf) = self.nodes[leaf_id].as_leaf_mut() else {
            return Err(VfdtError::domain(
                "update",
                DomainError::NotALeaf { node: leaf_id },
            ));
        };
        leaf.statistics_mut()
            .record(example.values(), example.label())?;

        match decision.attempt_split(leaf) {
            Some(feature) => {
                self.split_leaf(leaf_id, feature)?;
                Ok(Some(feature))
            }
            None => Ok(None),
        }
    }

    /// Probability that the example belongs to class 1.
    pub fn predict(&self, values: &[usize]) -> Result<f64> {
        let leaf_id = self.filter_to_leaf(values, "predict")?.get_node();
        Ok(self
            .leaf(leaf_id)
            .map(|leaf| leaf.statistics().class_probability_one())
            .unwrap_or(0.5))
    }

    /// Turns a leaf into a split node on `feature` with one fresh leaf per feature value.
    ///
    /// The children inherit the leaf's eligible features minus `feature`. The leaf's statistics
    /// are dropped. Returns the new children's ids in value order.
    pub fn split_leaf(&mut self, leaf_id: NodeId, feature: usize) -> Result<Vec<NodeId>> {
        let Some(leaf) = self.leaf(leaf_id) else {
            return Err(VfdtError::domain(
                "split",
                DomainError::NotALeaf { node: leaf_id },
            ));
        };
        let cardinality = match self.domain.cardinality(feature) {
            Some(k) if leaf.can_split_on(feature) => k,
            _ => {
                return Err(VfdtError::domain(
                    "split",
                    DomainError::FeatureNotEligible { feature },
                ));
            }
        };

        let child_features = leaf.features_without(feature);
        let children: Vec<Node> = (0..cardinality)
            .map(|_| Node::Leaf(LearningNode::new(&self.domain, child_features.clone())))
            .collect();
        let first_child = self.nodes.len();
        let child_ids: Vec<NodeId> = (first_child..first_child + cardinality).collect();

        self.nodes.extend(children);
        self.nodes[leaf_id] = Node::Split(SplitNode::new(feature, child_ids.clone()));
        log::debug!(
            "node {leaf_id} split on feature {feature} into {cardinality} leaves ({} nodes)",
            self.nodes.len()
        );
        Ok(child_ids)
    }
}
