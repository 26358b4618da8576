mod domains;

pub use domains::{sanity_domain, sanity_examples};
