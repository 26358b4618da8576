mod example;

pub use example::Example;
