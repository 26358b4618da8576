use std::cmp::Ordering;

/// A candidate split on one feature, ranked by its merit.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSplitSuggestion {
    split_feature: usize,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(split_feature: usize, merit: f64) -> Self {
        Self {
            split_feature,
            merit,
        }
    }

    pub fn get_split_feature(&self) -> usize {
        self.split_feature
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }
}

impl PartialEq for AttributeSplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.merit == other.merit
    }
}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.merit.partial_cmp(&other.merit)
    }
}
