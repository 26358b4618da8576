pub mod dummies;
pub mod stubs;

pub use dummies::{sanity_domain, sanity_examples};
pub use stubs::VecStream;
