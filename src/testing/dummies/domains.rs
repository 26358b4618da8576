use crate::core::FeatureDomain;
use crate::core::instances::Example;

/// Three features with 3, 3 and 2 values.
pub fn sanity_domain() -> FeatureDomain {
    FeatureDomain::new(vec![3, 3, 2]).expect("valid domain")
}

/// Four examples over [`sanity_domain`], two of each class.
pub fn sanity_examples() -> Vec<Example> {
    vec![
        Example::new(vec![1, 0, 1], 1),
        Example::new(vec![2, 1, 0], 0),
        Example::new(vec![0, 1, 1], 1),
        Example::new(vec![2, 0, 0], 0),
    ]
}
