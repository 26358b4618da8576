pub mod classifiers;
pub mod core;
pub mod error;
pub mod streams;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classifiers::hoeffding_tree::{HoeffdingTree, HoeffdingTreeParams};
pub use crate::core::FeatureDomain;
pub use crate::core::instances::Example;
pub use error::{DomainError, Result, VfdtError};
