use crate::core::FeatureDomain;
use crate::error::{DomainError, Result, VfdtError};

pub const NUM_CLASSES: usize = 2;

/// Per-class counts, indexed by label.
pub type ClassCounts = [u64; NUM_CLASSES];

/// The `nijk` table of a leaf: `nijk[i][j][k]` counts examples with feature `i` equal to `j`
/// and label `k`, together with running per-class totals.
///
/// Every recorded example increments one cell of every feature's table, so each feature's
/// table sums to the same value. [`LeafStatistics::total_count`] uses the class totals as the
/// canonical source for that value; it always equals the table sum of feature 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafStatistics {
    nijk: Vec<Vec<ClassCounts>>,
    class_totals: ClassCounts,
}

impl LeafStatistics {
    pub fn new(domain: &FeatureDomain) -> Self {
        Self {
            nijk: domain
                .cardinalities()
                .iter()
                .map(|&k| vec![[0; NUM_CLASSES]; k])
                .collect(),
            class_totals: [0; NUM_CLASSES],
        }
    }

    /// Rebuilds statistics from sparse `(feature, value, class, count)` cells.
    ///
    /// Class totals are taken from feature 0's table. Fails with
    /// [`DomainError::CountOverflow`] when a class total, the overall total or any feature's
    /// table sum does not fit in a `u64`.
    pub fn from_counts<I>(domain: &FeatureDomain, cells: I) -> std::result::Result<Self, DomainError>
    where
        I: IntoIterator<Item = (usize, usize, usize, u64)>,
    {
        let mut stats = Self::new(domain);
        for (feature, value, class, count) in cells {
            domain.check_value(feature, value)?;
            if class >= NUM_CLASSES {
                return Err(DomainError::LabelOutOfRange { label: class });
            }
            stats.nijk[feature][value][class] = count;
        }
        for counts in &stats.nijk[0] {
            for (total, &count) in stats.class_totals.iter_mut().zip(counts) {
                *total = total.checked_add(count).ok_or(DomainError::CountOverflow)?;
            }
        }
        stats
            .class_totals
            .iter()
            .try_fold(0u64, |acc, &c| acc.checked_add(c))
            .ok_or(DomainError::CountOverflow)?;
        if (0..stats.nijk.len()).any(|f| stats.feature_total(f).is_none()) {
            return Err(DomainError::CountOverflow);
        }
        Ok(stats)
    }

    /// Counts one example in every feature's table, eligible for splitting or not.
    ///
    /// The example is validated in full before anything is incremented.
    pub fn record(&mut self, values: &[usize], label: usize) -> Result<()> {
        self.check(values, label)
            .map_err(|e| VfdtError::domain("record", e))?;
        for (table, &value) in self.nijk.iter_mut().zip(values) {
            table[value][label] += 1;
        }
        self.class_totals[label] += 1;
        Ok(())
    }

    fn check(&self, values: &[usize], label: usize) -> std::result::Result<(), DomainError> {
        if label >= NUM_CLASSES {
            return Err(DomainError::LabelOutOfRange { label });
        }
        if values.len() != self.nijk.len() {
            return Err(DomainError::ArityMismatch {
                expected: self.nijk.len(),
                found: values.len(),
            });
        }
        for (feature, (table, &value)) in self.nijk.iter().zip(values).enumerate() {
            if value >= table.len() {
                return Err(DomainError::ValueOutOfRange {
                    feature,
                    value,
                    cardinality: table.len(),
                });
            }
        }
        // Every cell is bounded by the total, so a total below the maximum keeps cells safe too.
        if self.total_count() == u64::MAX {
            return Err(DomainError::CountOverflow);
        }
        Ok(())
    }

    pub fn total_count(&self) -> u64 {
        self.class_totals.iter().sum()
    }

    pub fn total_zeros(&self) -> u64 {
        self.class_totals[0]
    }

    pub fn total_ones(&self) -> u64 {
        self.class_totals[1]
    }

    /// Probability of class 1, or 0.5 unless both classes have been seen.
    pub fn class_probability_one(&self) -> f64 {
        let (zeros, ones) = (self.total_zeros(), self.total_ones());
        if zeros != 0 && ones != 0 {
            ones as f64 / (zeros + ones) as f64
        } else {
            0.5
        }
    }

    pub fn nijk(&self) -> &[Vec<ClassCounts>] {
        &self.nijk
    }

    /// Sum of one feature's table, or `None` if it overflows.
    pub fn feature_total(&self, feature: usize) -> Option<u64> {
        self.nijk[feature]
            .iter()
            .flatten()
            .try_fold(0u64, |acc, &count| acc.checked_add(count))
    }

    /// True when every feature's table sums to [`LeafStatistics::total_count`].
    pub fn is_consistent(&self) -> bool {
        let total = self.total_count();
        (0..self.nijk.len()).all(|f| self.feature_total(f) == Some(total))
    }

    /// Nonzero cells in feature, value, class order.
    pub fn nonzero_counts(&self) -> impl Iterator<Item = (usize, usize, usize, u64)> + '_ {
        self.nijk.iter().enumerate().flat_map(|(i, table)| {
            table.iter().enumerate().flat_map(move |(j, counts)| {
                counts
                    .iter()
                    .enumerate()
                    .filter(|&(_, &count)| count != 0)
                    .map(move |(k, &count)| (i, j, k, count))
            })
        })
    }
}
