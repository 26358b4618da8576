use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::FeatureDomain;
use crate::core::instances::Example;
use crate::error::{Result, VfdtError};
use crate::streams::stream::Stream;

/// Uniform random examples over a [`FeatureDomain`].
///
/// The label is 1 when the relevant feature falls in the upper half of its domain
/// (`2 * value >= cardinality`), then flipped with probability `noise_percentage / 100`.
#[derive(Debug)]
pub struct RandomNominalGenerator {
    rng: StdRng,
    domain: FeatureDomain,
    relevant_feature: usize,
    noise_percentage: u32,
    max_instances: Option<usize>,
    produced: usize,
}

impl RandomNominalGenerator {
    pub fn new(
        domain: FeatureDomain,
        relevant_feature: usize,
        noise_percentage: u32,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self> {
        if !domain.contains_feature(relevant_feature) {
            return Err(VfdtError::Config(format!(
                "relevant feature {relevant_feature} is outside a domain of {} features",
                domain.num_features()
            )));
        }
        if noise_percentage > 100 {
            return Err(VfdtError::Config(
                "noise percentage must be in [0, 100]".into(),
            ));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            domain,
            relevant_feature,
            noise_percentage,
            max_instances,
            produced: 0,
        })
    }

    #[inline]
    fn determine_class(&self, values: &[usize]) -> usize {
        let cardinality = self.domain.cardinalities()[self.relevant_feature];
        usize::from(2 * values[self.relevant_feature] >= cardinality)
    }

    #[inline]
    fn maybe_flip_with_noise(&mut self, cls: usize) -> usize {
        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.noise_percentage {
            1 - cls
        } else {
            cls
        }
    }
}

impl Stream for RandomNominalGenerator {
    fn domain(&self) -> &FeatureDomain {
        &self.domain
    }

    fn has_more_examples(&self) -> bool {
        self.max_instances.map_or(true, |max| self.produced < max)
    }

    fn next_example(&mut self) -> Option<Example> {
        if !self.has_more_examples() {
            return None;
        }
        let values: Vec<usize> = (0..self.domain.num_features())
            .map(|f| self.rng.random_range(0..self.domain.cardinalities()[f]))
            .collect();
        let cls = self.determine_class(&values);
        let cls = self.maybe_flip_with_noise(cls);
        self.produced += 1;
        Some(Example::new(values, cls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> FeatureDomain {
        FeatureDomain::new(vec![3, 4, 2]).unwrap()
    }

    #[test]
    fn values_stay_in_domain_and_follow_rule() {
        let mut generator = RandomNominalGenerator::new(domain(), 1, 0, Some(300), 42).unwrap();
        let mut count = 0;
        while let Some(e) = generator.next_example() {
            assert!(generator.domain().check_example(e.values()).is_ok());
            assert_eq!(e.label(), usize::from(e.values()[1] >= 2));
            count += 1;
        }
        assert_eq!(count, 300);
        assert!(!generator.has_more_examples());
    }

    #[test]
    fn full_noise_flips_every_label() {
        let mut generator = RandomNominalGenerator::new(domain(), 2, 100, Some(50), 7).unwrap();
        while let Some(e) = generator.next_example() {
            assert_eq!(e.label(), 1 - e.values()[2]);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomNominalGenerator::new(domain(), 0, 10, None, 2025).unwrap();
        let mut b = RandomNominalGenerator::new(domain(), 0, 10, None, 2025).unwrap();
        for _ in 0..40 {
            assert_eq!(a.next_example(), b.next_example());
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(matches!(
            RandomNominalGenerator::new(domain(), 3, 0, None, 1),
            Err(VfdtError::Config(_))
        ));
        assert!(matches!(
            RandomNominalGenerator::new(domain(), 0, 101, None, 1),
            Err(VfdtError::Config(_))
        ));
    }
}
