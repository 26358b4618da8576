pub mod codec;
mod hoeffding_tree;
pub mod instance_conditional_test;
pub mod nodes;
mod params;
pub mod split_criteria;
pub mod split_decision;
pub mod tree;

pub use hoeffding_tree::HoeffdingTree;
pub use params::{HoeffdingTreeParams, params_schema};
pub use split_decision::{SplitDecision, SplitEvaluation};
pub use tree::Tree;
