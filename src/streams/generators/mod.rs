mod random_nominal;

pub use random_nominal::RandomNominalGenerator;
