mod feature_domain;
pub mod instances;

pub use feature_domain::FeatureDomain;
