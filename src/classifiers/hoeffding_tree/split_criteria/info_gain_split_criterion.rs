use crate::classifiers::hoeffding_tree::nodes::ClassCounts;
use crate::classifiers::hoeffding_tree::split_criteria::split_criterion::SplitCriterion;
use crate::utils::math::entropy;

#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    /// Information gain of splitting on `feature_id`, computed from a leaf's `nijk` table.
    pub fn information_gain(&self, feature_id: usize, nijk: &[Vec<ClassCounts>]) -> f64 {
        let post_split_dists: Vec<Vec<f64>> = nijk[feature_id]
            .iter()
            .map(|counts| counts.iter().map(|&c| c as f64).collect())
            .collect();
        let mut pre_split_distribution = vec![0.0; counts_width(&post_split_dists)];
        for dist in &post_split_dists {
            for (total, c) in pre_split_distribution.iter_mut().zip(dist) {
                *total += c;
            }
        }
        self.get_merit_of_split(&pre_split_distribution, &post_split_dists)
    }
}

fn counts_width(dists: &[Vec<f64>]) -> usize {
    dists.iter().map(Vec::len).max().unwrap_or(0)
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_range_of_merit(&self, pre_split_distribution: &[f64]) -> f64 {
        let num_classes = pre_split_distribution.len().max(2);
        (num_classes as f64).log2()
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let total: f64 = pre_split_distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = post_split_dists
            .iter()
            .map(|dist| {
                let weight = dist.iter().sum::<f64>() / total;
                weight * entropy(dist)
            })
            .sum();
        entropy(pre_split_distribution) - weighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-7;

    #[test]
    fn no_examples_gives_zero_gain() {
        let nijk = vec![vec![[0, 0], [0, 0]]];
        assert_eq!(InfoGainSplitCriterion::new().information_gain(0, &nijk), 0.0);
    }

    #[test]
    fn perfect_separation_gives_one_bit() {
        let nijk = vec![vec![[1, 0], [0, 1]]];
        let ig = InfoGainSplitCriterion::new().information_gain(0, &nijk);
        assert!((ig - 1.0).abs() < EPS);

        let nijk = vec![vec![[0, 7], [7, 0], [0, 0]]];
        let ig = InfoGainSplitCriterion::new().information_gain(0, &nijk);
        assert!((ig - 1.0).abs() < EPS);
    }

    #[test]
    fn uninformative_feature_gives_zero_gain() {
        // Every value carries the same 1:3 class ratio as the whole leaf.
        let nijk = vec![vec![[1, 3], [2, 6], [3, 9]]];
        let ig = InfoGainSplitCriterion::new().information_gain(0, &nijk);
        assert!(ig.abs() < EPS);
    }

    #[test]
    fn partial_separation_is_between_bounds() {
        let nijk = vec![vec![[1, 0], [3, 4]], vec![[2, 2], [2, 2]]];
        let c = InfoGainSplitCriterion::new();
        let g0 = c.information_gain(0, &nijk);
        let g1 = c.information_gain(1, &nijk);
        assert!(g0 > 0.0 && g0 < 1.0);
        assert!(g1.abs() < EPS);
    }

    #[test]
    fn binary_range_is_one() {
        let c = InfoGainSplitCriterion::new();
        assert_eq!(c.get_range_of_merit(&[3.0, 5.0]), 1.0);
        assert_eq!(c.get_range_of_merit(&[]), 1.0);
    }
}
