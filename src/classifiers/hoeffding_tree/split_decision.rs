use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::nodes::LearningNode;
use crate::classifiers::hoeffding_tree::params::HoeffdingTreeParams;
use crate::classifiers::hoeffding_tree::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::error::Result;
use crate::utils::math::hoeffding_bound;

/// Outcome of evaluating the two best candidate features of a leaf.
#[derive(Debug, Clone, Copy)]
pub struct SplitEvaluation {
    pub best: AttributeSplitSuggestion,
    pub second_best_merit: f64,
    pub epsilon: f64,
    pub should_split: bool,
}

/// Hoeffding-bound stopping rule deciding when and where a leaf splits.
#[derive(Debug, Clone)]
pub struct SplitDecision {
    tie_threshold: f64,
    split_confidence: f64,
    grace_period: u64,
    criterion: InfoGainSplitCriterion,
}

impl SplitDecision {
    /// Fails with a config error unless `params` pass [`HoeffdingTreeParams::validate`].
    pub fn new(params: &HoeffdingTreeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            tie_threshold: params.delta,
            split_confidence: params.tau,
            grace_period: params.nmin,
            criterion: InfoGainSplitCriterion::new(),
        })
    }

    /// True when the leaf's count just reached a positive multiple of the grace period and it
    /// still has a feature to split on.
    pub fn should_evaluate(&self, leaf: &LearningNode) -> bool {
        let n = leaf.statistics().total_count();
        n > 0 && n % self.grace_period == 0 && !leaf.possible_split_features().is_empty()
    }

    /// Ranks the leaf's candidate features and applies the stopping rule.
    ///
    /// Returns `None` when the leaf has no candidates. Both merits start at zero and the best
    /// feature starts as the first candidate; strict comparisons keep the earliest feature on
    /// ties.
    pub fn evaluate(&self, leaf: &LearningNode) -> Option<SplitEvaluation> {
        let candidates = leaf.possible_split_features();
        let first = *candidates.first()?;
        let nijk = leaf.statistics().nijk();

        let mut best = AttributeSplitSuggestion::new(first, 0.0);
        let mut second_best_merit = 0.0;
        for &feature in candidates {
            let merit = self.criterion.information_gain(feature, nijk);
            if merit > best.get_merit() {
                second_best_merit = best.get_merit();
                best = AttributeSplitSuggestion::new(feature, merit);
            } else if merit > second_best_merit {
                second_best_merit = merit;
            }
        }

        let n = leaf.statistics().total_count() as f64;
        let range = self.criterion.get_range_of_merit(&[0.0; 2]);
        let epsilon = hoeffding_bound(range, self.split_confidence, n);
        let gap = best.get_merit() - second_best_merit;
        let should_split = gap < self.tie_threshold || gap > epsilon;

        Some(SplitEvaluation {
            best,
            second_best_merit,
            epsilon,
            should_split,
        })
    }

    /// Feature to split the leaf on now, if any.
    pub fn attempt_split(&self, leaf: &LearningNode) -> Option<usize> {
        if !self.should_evaluate(leaf) {
            return None;
        }
        let evaluation = self.evaluate(leaf)?;
        if evaluation.should_split {
            log::debug!(
                "split fires on feature {} (gain {:.4}, gap {:.4}, epsilon {:.4})",
                evaluation.best.get_split_feature(),
                evaluation.best.get_merit(),
                evaluation.best.get_merit() - evaluation.second_best_merit,
                evaluation.epsilon
            );
            Some(evaluation.best.get_split_feature())
        } else {
            log::trace!(
                "no split: gap {:.4} within [{:.4}, {:.4}]",
                evaluation.best.get_merit() - evaluation.second_best_merit,
                self.tie_threshold,
                evaluation.epsilon
            );
            None
        }
    }
}
