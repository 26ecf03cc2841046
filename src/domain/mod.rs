// Domain layer: gauge profiles, report records and the two railway capability sets.
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
