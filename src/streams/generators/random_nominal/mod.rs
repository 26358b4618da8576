mod random_nominal_generator;

pub use random_nominal_generator::RandomNominalGenerator;
