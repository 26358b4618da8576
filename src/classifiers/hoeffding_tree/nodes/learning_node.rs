use crate::classifiers::hoeffding_tree::nodes::leaf_statistics::LeafStatistics;
use crate::core::FeatureDomain;

/// A leaf that keeps learning until it is split.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningNode {
    possible_split_features: Vec<usize>,
    statistics: LeafStatistics,
}

impl LearningNode {
    pub fn new(domain: &FeatureDomain, possible_split_features: Vec<usize>) -> Self {
        Self::with_statistics(possible_split_features, LeafStatistics::new(domain))
    }

    pub fn with_statistics(possible_split_features: Vec<usize>, statistics: LeafStatistics) -> Self {
        Self {
            possible_split_features,
            statistics,
        }
    }

    pub fn possible_split_features(&self) -> &[usize] {
        &self.possible_split_features
    }

    pub fn can_split_on(&self, feature: usize) -> bool {
        self.possible_split_features.contains(&feature)
    }

    /// Eligible features for the children of a split on `feature`, order preserved.
    pub fn features_without(&self, feature: usize) -> Vec<usize> {
        self.possible_split_features
            .iter()
            .copied()
            .filter(|&f| f != feature)
            .collect()
    }

    pub fn statistics(&self) -> &LeafStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut LeafStatistics {
        &mut self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_without_keeps_order() {
        let domain = FeatureDomain::new(vec![3, 3, 2, 4]).unwrap();
        let leaf = LearningNode::new(&domain, vec![3, 0, 2]);
        assert_eq!(leaf.features_without(0), vec![3, 2]);
        assert_eq!(leaf.features_without(1), vec![3, 0, 2]);
        assert!(leaf.can_split_on(2));
        assert!(!leaf.can_split_on(1));
        assert_eq!(leaf.statistics().total_count(), 0);
    }
}
